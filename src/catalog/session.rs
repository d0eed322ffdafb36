use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::model::{Catalog, City, Location, Project};
use crate::constants::CAROUSEL_SLIDE_WIDTH_PX;
use crate::error::{EstateError, Result};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Image scale kept in tenths so repeated steps stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom(u32);

impl Default for Zoom {
    fn default() -> Self {
        Zoom(10)
    }
}

impl Zoom {
    pub fn adjust(&mut self, direction: ZoomDirection) {
        match direction {
            ZoomDirection::In => self.0 += 1,
            // never below 0.1
            ZoomDirection::Out if self.0 > 1 => self.0 -= 1,
            ZoomDirection::Out => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Zoom::default();
    }

    pub fn scale(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// CSS transform value for the current scale.
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    ProjectDetails,
    FullImage,
    Video,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenProject {
    pub location: String,
    pub name: String,
    pub image_index: usize,
    pub carousel_offset_px: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FullImageView {
    pub src: String,
    pub zoom: Zoom,
}

/// What the page needs to start a brochure download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrochureDownload {
    pub url: String,
    pub file_name: String,
}

/// Navigation state for one page view of one city.
#[derive(Debug)]
pub struct BrowserSession<'a> {
    catalog: &'a Catalog,
    city_name: String,
    current_location: Option<String>,
    project: Option<OpenProject>,
    zoom: Zoom,
    full_image: Option<FullImageView>,
    video: Option<String>,
    contact_open: bool,
}

impl<'a> BrowserSession<'a> {
    pub fn new(catalog: &'a Catalog, city: &str) -> Result<Self> {
        catalog.city(city)?;
        Ok(Self {
            catalog,
            city_name: city.to_string(),
            current_location: None,
            project: None,
            zoom: Zoom::default(),
            full_image: None,
            video: None,
            contact_open: false,
        })
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn city(&self) -> Result<&'a City> {
        self.catalog.city(&self.city_name)
    }

    pub fn locations(&self) -> Result<Vec<(&'a str, &'a Location)>> {
        Ok(self
            .city()?
            .locations
            .iter()
            .map(|(name, location)| (name.as_str(), location))
            .collect())
    }

    pub fn location(&self, name: &str) -> Result<&'a Location> {
        self.city()?.location(&self.city_name, name)
    }

    pub fn project(&self, location: &str, name: &str) -> Result<&'a Project> {
        self.location(location)?.project(location, name)
    }

    pub fn current_location(&self) -> Option<&str> {
        self.current_location.as_deref()
    }

    /// Make `name` the active location; any other becomes inactive.
    pub fn show_location(&mut self, name: &str) -> Result<&'a Location> {
        let location = self.location(name)?;
        self.current_location = Some(name.to_string());
        Ok(location)
    }

    pub fn hide_location(&mut self) {
        self.current_location = None;
    }

    pub fn open_project(&self) -> Option<&OpenProject> {
        self.project.as_ref()
    }

    fn open_project_data(&self) -> Result<(&OpenProject, &'a Project)> {
        let open = self.project.as_ref().ok_or(EstateError::NoProjectOpen)?;
        let project = self.project(&open.location, &open.name)?;
        Ok((open, project))
    }

    /// Open the project details modal on its first image.
    pub fn show_project(&mut self, location: &str, name: &str) -> Result<&'a Project> {
        let project = self.project(location, name)?;
        self.project = Some(OpenProject {
            location: location.to_string(),
            name: name.to_string(),
            image_index: 0,
            carousel_offset_px: 0,
        });
        self.zoom.reset();
        Ok(project)
    }

    pub fn close_project(&mut self) {
        self.project = None;
        self.zoom.reset();
    }

    pub fn main_image(&self) -> Option<&'a str> {
        let (open, project) = self.open_project_data().ok()?;
        project.images.get(open.image_index).map(String::as_str)
    }

    pub fn set_main_image(&mut self, index: usize) -> Result<&'a str> {
        let (_, project) = self.open_project_data()?;
        let image = project.images.get(index).ok_or(EstateError::ImageOutOfRange {
            index,
            len: project.images.len(),
        })?;
        if let Some(open) = self.project.as_mut() {
            open.image_index = index;
        }
        self.zoom.reset();
        Ok(image.as_str())
    }

    /// Shift the carousel one slide; positive `direction` moves forward.
    /// The track never scrolls past its first or last slide.
    pub fn move_carousel(&mut self, direction: i64) -> Result<i64> {
        let (_, project) = self.open_project_data()?;
        let slides = project.images.len() as i64;
        let min_offset = -(slides - 1).max(0) * CAROUSEL_SLIDE_WIDTH_PX;
        let open = self.project.as_mut().ok_or(EstateError::NoProjectOpen)?;
        let step = direction.signum() * CAROUSEL_SLIDE_WIDTH_PX;
        open.carousel_offset_px = (open.carousel_offset_px - step).clamp(min_offset, 0);
        Ok(open.carousel_offset_px)
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn adjust_zoom(&mut self, direction: ZoomDirection) -> Zoom {
        self.zoom.adjust(direction);
        self.zoom
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset();
    }

    /// Show the current main image full screen at 1.0 scale.
    pub fn open_full_image(&mut self) -> Result<&FullImageView> {
        let src = self.main_image().ok_or(EstateError::NoProjectOpen)?.to_string();
        Ok(&*self.full_image.insert(FullImageView {
            src,
            zoom: Zoom::default(),
        }))
    }

    pub fn full_image(&self) -> Option<&FullImageView> {
        self.full_image.as_ref()
    }

    pub fn adjust_modal_zoom(&mut self, direction: ZoomDirection) -> Option<Zoom> {
        let view = self.full_image.as_mut()?;
        view.zoom.adjust(direction);
        Some(view.zoom)
    }

    pub fn reset_modal_zoom(&mut self) {
        if let Some(view) = self.full_image.as_mut() {
            view.zoom.reset();
        }
    }

    pub fn close_full_image(&mut self) {
        self.full_image = None;
    }

    pub fn open_video(&mut self, src: &str) {
        self.video = Some(src.to_string());
    }

    pub fn video(&self) -> Option<&str> {
        self.video.as_deref()
    }

    pub fn close_video(&mut self) {
        self.video = None;
    }

    pub fn open_contact(&mut self) {
        self.contact_open = true;
    }

    pub fn close_contact(&mut self) {
        self.contact_open = false;
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::ProjectDetails => self.project.is_some(),
            Modal::FullImage => self.full_image.is_some(),
            Modal::Video => self.video.is_some(),
            Modal::Contact => self.contact_open,
        }
    }

    /// Backdrop click on `modal`.
    pub fn dismiss(&mut self, modal: Modal) {
        match modal {
            Modal::ProjectDetails => self.close_project(),
            Modal::FullImage => self.close_full_image(),
            Modal::Video => self.close_video(),
            Modal::Contact => self.close_contact(),
        }
    }

    pub fn brochure_download(&self) -> Result<BrochureDownload> {
        let (open, project) = self.open_project_data()?;
        Ok(BrochureDownload {
            url: project.brochure_url.clone(),
            file_name: brochure_file_name(&open.name),
        })
    }
}

pub fn brochure_file_name(project_name: &str) -> String {
    format!("{}_Brochure.pdf", WHITESPACE_RUN.replace_all(project_name, "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::fixtures::CATALOG_JSON;

    fn catalog() -> Catalog {
        Catalog::from_json(CATALOG_JSON).unwrap()
    }

    #[test]
    fn test_unknown_city() {
        let catalog = catalog();
        assert!(matches!(
            BrowserSession::new(&catalog, "Mumbai"),
            Err(EstateError::CityNotFound(_))
        ));
    }

    #[test]
    fn test_show_and_hide_location() {
        let catalog = catalog();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();
        assert_eq!(session.locations().unwrap().len(), 2);

        let location = session.show_location("Hinjewadi").unwrap();
        assert_eq!(location.projects.len(), 2);
        assert_eq!(session.current_location(), Some("Hinjewadi"));

        session.show_location("Baner").unwrap();
        assert_eq!(session.current_location(), Some("Baner"));

        assert!(session.show_location("Wakad").is_err());
        assert_eq!(session.current_location(), Some("Baner"));

        session.hide_location();
        assert_eq!(session.current_location(), None);
    }

    #[test]
    fn test_show_project_starts_on_first_image() {
        let catalog = catalog();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();

        session.show_project("Hinjewadi", "Skyline Towers").unwrap();
        session.set_main_image(2).unwrap();
        session.adjust_zoom(ZoomDirection::In);

        session.show_project("Hinjewadi", "Skyline Towers").unwrap();
        assert_eq!(session.main_image(), Some("img/skyline-1.jpg"));
        assert_eq!(session.zoom(), Zoom::default());
        assert!(session.is_open(Modal::ProjectDetails));
    }

    #[test]
    fn test_set_main_image_bounds() {
        let catalog = catalog();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();
        assert!(matches!(session.set_main_image(0), Err(EstateError::NoProjectOpen)));

        session.show_project("Hinjewadi", "Skyline Towers").unwrap();
        session.adjust_zoom(ZoomDirection::In);
        assert_eq!(session.set_main_image(1).unwrap(), "img/skyline-2.jpg");
        assert_eq!(session.zoom().scale(), 1.0);

        match session.set_main_image(3) {
            Err(EstateError::ImageOutOfRange { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 3);
            }
            other => panic!("expected ImageOutOfRange, got {:?}", other),
        }
        assert_eq!(session.main_image(), Some("img/skyline-2.jpg"));
    }

    #[test]
    fn test_carousel_is_clamped() {
        let catalog = catalog();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();
        session.show_project("Hinjewadi", "Skyline Towers").unwrap();

        assert_eq!(session.move_carousel(-1).unwrap(), 0);
        assert_eq!(session.move_carousel(1).unwrap(), -270);
        assert_eq!(session.move_carousel(1).unwrap(), -540);
        assert_eq!(session.move_carousel(1).unwrap(), -540);
        assert_eq!(session.move_carousel(-1).unwrap(), -270);

        session.show_project("Hinjewadi", "Green <Meadows>").unwrap();
        assert_eq!(session.move_carousel(1).unwrap(), 0);
    }

    #[test]
    fn test_zoom_floor() {
        let mut zoom = Zoom::default();
        for _ in 0..20 {
            zoom.adjust(ZoomDirection::Out);
        }
        assert_eq!(zoom.scale(), 0.1);

        zoom.adjust(ZoomDirection::In);
        zoom.adjust(ZoomDirection::In);
        assert_eq!(zoom.transform(), "scale(0.3)");

        zoom.reset();
        assert_eq!(zoom.transform(), "scale(1)");
    }

    #[test]
    fn test_full_image_modal() {
        let catalog = catalog();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();
        assert!(session.open_full_image().is_err());
        assert_eq!(session.adjust_modal_zoom(ZoomDirection::In), None);

        session.show_project("Hinjewadi", "Skyline Towers").unwrap();
        session.set_main_image(1).unwrap();
        session.adjust_zoom(ZoomDirection::In);

        let view = session.open_full_image().unwrap();
        assert_eq!(view.src, "img/skyline-2.jpg");
        assert_eq!(view.zoom.scale(), 1.0);

        session.adjust_modal_zoom(ZoomDirection::In);
        assert_eq!(session.full_image().unwrap().zoom.scale(), 1.1);
        // main image zoom is independent of the modal's
        assert_eq!(session.zoom().scale(), 1.1);
        session.reset_modal_zoom();
        assert_eq!(session.full_image().unwrap().zoom.scale(), 1.0);

        session.dismiss(Modal::FullImage);
        assert!(!session.is_open(Modal::FullImage));
        assert!(session.is_open(Modal::ProjectDetails));
    }

    #[test]
    fn test_video_and_contact_modals() {
        let catalog = catalog();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();

        session.open_video("video/skyline.mp4");
        assert_eq!(session.video(), Some("video/skyline.mp4"));
        session.dismiss(Modal::Video);
        assert_eq!(session.video(), None);

        session.open_contact();
        assert!(session.is_open(Modal::Contact));
        session.close_contact();
        assert!(!session.is_open(Modal::Contact));
    }

    #[test]
    fn test_brochure_download() {
        let catalog = catalog();
        let mut session = BrowserSession::new(&catalog, "Pune").unwrap();
        assert!(session.brochure_download().is_err());

        session.show_project("Hinjewadi", "Skyline Towers").unwrap();
        let download = session.brochure_download().unwrap();
        assert_eq!(download.url, "https://cdn.example.com/skyline.pdf");
        assert_eq!(download.file_name, "Skyline_Towers_Brochure.pdf");
    }

    #[test]
    fn test_brochure_file_name_collapses_whitespace() {
        assert_eq!(brochure_file_name("Sky  Line\tHeights"), "Sky_Line_Heights_Brochure.pdf");
    }
}
