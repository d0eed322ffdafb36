//! HTML fragments for the catalog pages.
//!
//! Everything catalog-controlled goes through askama's HTML escaping, and
//! interactive elements carry `data-action` plus entity identifiers instead
//! of inline handler code. The page script binds one listener per action.

use askama::Template;

use crate::catalog::model::{Location, Project};
use crate::catalog::session::{brochure_file_name, BrowserSession};
use crate::error::{EstateError, Result};

pub struct LocationCard<'a> {
    pub name: &'a str,
    pub thumbnail: &'a str,
}

#[derive(Template)]
#[template(path = "locations_grid.html")]
pub struct LocationsGridTemplate<'a> {
    pub cards: Vec<LocationCard<'a>>,
}

pub struct ProjectCard<'a> {
    pub name: &'a str,
    pub cover: Option<&'a str>,
    pub video: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "project_cards.html")]
pub struct ProjectCardsTemplate<'a> {
    pub location_name: &'a str,
    pub cards: Vec<ProjectCard<'a>>,
}

#[derive(Template)]
#[template(path = "location_details.html")]
pub struct LocationDetailsTemplate<'a> {
    pub name: &'a str,
    pub location: &'a Location,
    pub active: bool,
    pub projects_html: String,
}

#[derive(Template)]
#[template(path = "project_details.html")]
pub struct ProjectDetailsTemplate<'a> {
    pub location_name: &'a str,
    pub name: &'a str,
    pub project: &'a Project,
    pub main_image: Option<&'a str>,
    pub image_index: usize,
    pub carousel_offset_px: i64,
    pub zoom_transform: String,
    pub brochure_file_name: String,
}

/// Location cards for the session's city.
pub fn render_locations(session: &BrowserSession<'_>) -> Result<String> {
    let cards = session
        .locations()?
        .into_iter()
        .map(|(name, location)| LocationCard {
            name,
            thumbnail: &location.thumbnail,
        })
        .collect();
    Ok(LocationsGridTemplate { cards }.render()?)
}

/// Project cards for one location. A project with a video thumbnail shows
/// the video; otherwise its first image.
pub fn render_projects(session: &BrowserSession<'_>, location_name: &str) -> Result<String> {
    let location = session.location(location_name)?;
    let cards = location
        .projects
        .iter()
        .map(|(name, project)| ProjectCard {
            name,
            cover: project.cover_image(),
            video: project.video_thumbnail.as_deref(),
        })
        .collect();
    Ok(ProjectCardsTemplate { location_name, cards }.render()?)
}

pub fn render_location_details(session: &BrowserSession<'_>, location_name: &str) -> Result<String> {
    let location = session.location(location_name)?;
    let template = LocationDetailsTemplate {
        name: location_name,
        location,
        active: session.current_location() == Some(location_name),
        projects_html: render_projects(session, location_name)?,
    };
    Ok(template.render()?)
}

/// Body of the project details modal for the project the session has open.
pub fn render_project_details(session: &BrowserSession<'_>) -> Result<String> {
    let open = session.open_project().ok_or(EstateError::NoProjectOpen)?;
    let project = session.project(&open.location, &open.name)?;
    let template = ProjectDetailsTemplate {
        location_name: &open.location,
        name: &open.name,
        project,
        main_image: session.main_image(),
        image_index: open.image_index,
        carousel_offset_px: open.carousel_offset_px,
        zoom_transform: session.zoom().transform(),
        brochure_file_name: brochure_file_name(&open.name),
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::fixtures::CATALOG_JSON;
    use crate::catalog::model::Catalog;

    #[test]
    fn test_locations_grid() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let session = BrowserSession::new(&catalog, "Pune").unwrap();
        let html = render_locations(&session).unwrap();

        assert_eq!(html.matches("class=\"location-card\"").count(), 2);
        assert!(html.contains("data-location=\"Hinjewadi\""));
        assert!(html.contains("src=\"img/baner.jpg\""));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_project_cards_prefer_video() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let session = BrowserSession::new(&catalog, "Pune").unwrap();
        let html = render_projects(&session, "Hinjewadi").unwrap();

        assert!(html.contains("data-video-src=\"video/skyline.mp4\""));
        assert!(!html.contains("img/skyline-1.jpg"));
        assert!(html.contains("img/meadows-1.jpg"));
    }

    #[test]
    fn test_catalog_strings_are_escaped() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();

        let cards = render_projects(&session, "Hinjewadi").unwrap();
        assert!(cards.contains("Green &lt;Meadows&gt;"));
        assert!(!cards.contains("<Meadows>"));

        session.show_project("Hinjewadi", "Green <Meadows>").unwrap();
        let details = render_project_details(&session).unwrap();
        assert!(!details.contains("\"garden\""));
        assert!(details.contains("&amp; villas"));
        assert!(!details.contains("onclick"));
    }

    #[test]
    fn test_location_details() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();
        session.show_location("Hinjewadi").unwrap();

        let html = render_location_details(&session, "Hinjewadi").unwrap();
        assert!(html.contains("location-active"));
        assert!(html.contains("Rajiv Gandhi Infotech Park"));
        assert!(html.contains("Ring road and metro extension."));
        assert!(html.contains("class=\"project-card\""));

        let other = render_location_details(&session, "Baner").unwrap();
        assert!(!other.contains("location-active"));
    }

    #[test]
    fn test_project_details_tracks_session() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();
        assert!(matches!(render_project_details(&session), Err(EstateError::NoProjectOpen)));

        session.show_project("Hinjewadi", "Skyline Towers").unwrap();
        session.set_main_image(2).unwrap();
        session.move_carousel(1).unwrap();

        let html = render_project_details(&session).unwrap();
        assert!(html.contains("id=\"project-main-image\" src=\"img/skyline-3.jpg\""));
        assert!(html.contains("translateX(-270px)"));
        assert!(html.contains("<li>Clubhouse</li>"));
        assert!(html.contains("data-file-name=\"Skyline_Towers_Brochure.pdf\""));
        assert_eq!(html.matches("class=\"carousel-slide").count(), 3);
    }
}
