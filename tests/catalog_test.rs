use std::io::Write;

use estate_contact::catalog::render::{render_location_details, render_locations, render_project_details};
use estate_contact::catalog::{BrowserSession, Catalog, Modal, ZoomDirection};
use estate_contact::EstateError;

const CATALOG: &str = r#"{
  "Nagpur": {
    "locations": {
      "Wardha Road": {
        "thumbnail": "img/wardha.jpg",
        "map": "https://maps.example.com/embed?q=wardha",
        "keypoints": [{"title": "Airport", "description": "10 minutes away"}],
        "about": "Southern growth corridor.",
        "developmentPlans": "MIHAN SEZ expansion.",
        "investmentPotential": "High.",
        "connectivity": "NH-44.",
        "projects": {
          "Orange County": {
            "images": ["img/oc-1.jpg", "img/oc-2.jpg"],
            "description": "Plotted development.",
            "benefits": "Clear titles.",
            "features": ["Gated"],
            "connectivity": ["NH-44 frontage"],
            "investment": ["Appreciating land"],
            "map": "https://maps.example.com/embed?q=oc",
            "brochureUrl": "https://cdn.example.com/oc.pdf"
          }
        }
      }
    }
  },
  "Pune": {"locations": {}}
}"#;

fn load() -> Catalog {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    Catalog::load(file.path()).unwrap()
}

#[test]
fn test_catalog_loads_from_file() {
    let catalog = load();
    let cities: Vec<&str> = catalog.city_names().collect();
    assert_eq!(cities, vec!["Nagpur", "Pune"]);
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        Catalog::load("/nonexistent/projects.json"),
        Err(EstateError::Io(_))
    ));
}

#[test]
fn test_browse_city_to_project() {
    let catalog = load();
    let mut session = BrowserSession::new(&catalog, "Nagpur").unwrap();

    let grid = render_locations(&session).unwrap();
    assert!(grid.contains("data-action=\"show-location\""));

    session.show_location("Wardha Road").unwrap();
    let details = render_location_details(&session, "Wardha Road").unwrap();
    assert!(details.contains("MIHAN SEZ expansion."));
    assert!(details.contains("data-project=\"Orange County\""));

    session.show_project("Wardha Road", "Orange County").unwrap();
    session.adjust_zoom(ZoomDirection::In);
    let modal = render_project_details(&session).unwrap();
    assert!(modal.contains("scale(1.1)"));
    assert!(modal.contains("data-file-name=\"Orange_County_Brochure.pdf\""));

    session.open_contact();
    session.dismiss(Modal::ProjectDetails);
    assert!(!session.is_open(Modal::ProjectDetails));
    assert!(session.is_open(Modal::Contact));
    assert_eq!(session.zoom().scale(), 1.0);
}

#[test]
fn test_empty_city_renders_empty_grid() {
    let catalog = load();
    let session = BrowserSession::new(&catalog, "Pune").unwrap();
    let grid = render_locations(&session).unwrap();
    assert!(!grid.contains("location-card"));
}
