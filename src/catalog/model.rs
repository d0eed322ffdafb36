use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{EstateError, Result};

/// The whole catalog document: city name to city. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub cities: BTreeMap<String, City>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub locations: BTreeMap<String, Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub thumbnail: String,
    /// Embeddable map URL.
    #[serde(default)]
    pub map: String,
    #[serde(default)]
    pub keypoints: Vec<Keypoint>,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub development_plans: String,
    #[serde(default)]
    pub investment_potential: String,
    #[serde(default)]
    pub connectivity: String,
    #[serde(default)]
    pub projects: BTreeMap<String, Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub connectivity: Vec<String>,
    #[serde(default)]
    pub investment: Vec<String>,
    #[serde(default)]
    pub map: String,
    #[serde(default)]
    pub brochure_url: String,
    #[serde(default)]
    pub video_thumbnail: Option<String>,
}

impl Project {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Catalog {
    /// Parse a catalog document. Every URL-bearing field must be http(s) or
    /// relative; anything else (`javascript:`, `data:`) fails the load.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check_urls()?;
        Ok(catalog)
    }

    fn check_urls(&self) -> Result<()> {
        for city in self.cities.values() {
            for location in city.locations.values() {
                check_url("thumbnail", &location.thumbnail)?;
                check_url("map", &location.map)?;
                for project in location.projects.values() {
                    for image in &project.images {
                        check_url("images", image)?;
                    }
                    check_url("map", &project.map)?;
                    check_url("brochureUrl", &project.brochure_url)?;
                    if let Some(video) = &project.video_thumbnail {
                        check_url("videoThumbnail", video)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn city(&self, name: &str) -> Result<&City> {
        self.cities
            .get(name)
            .ok_or_else(|| EstateError::CityNotFound(name.to_string()))
    }

    pub fn city_names(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }
}

impl City {
    pub fn location(&self, city: &str, name: &str) -> Result<&Location> {
        self.locations.get(name).ok_or_else(|| EstateError::LocationNotFound {
            city: city.to_string(),
            location: name.to_string(),
        })
    }
}

impl Location {
    pub fn project(&self, location: &str, name: &str) -> Result<&Project> {
        self.projects.get(name).ok_or_else(|| EstateError::ProjectNotFound {
            location: location.to_string(),
            project: name.to_string(),
        })
    }
}

/// Browsers drop whitespace and control characters when reading a scheme,
/// so they are ignored here too.
fn url_scheme(url: &str) -> Option<String> {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let end = compact.find(|c| matches!(c, ':' | '/' | '?' | '#'))?;
    compact[end..]
        .starts_with(':')
        .then(|| compact[..end].to_ascii_lowercase())
}

fn check_url(field: &str, url: &str) -> Result<()> {
    match url_scheme(url).as_deref() {
        None | Some("http") | Some("https") => Ok(()),
        Some(_) => Err(EstateError::UnsafeUrl {
            field: field.to_string(),
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const CATALOG_JSON: &str = r#"{
  "Pune": {
    "locations": {
      "Hinjewadi": {
        "thumbnail": "img/hinjewadi.jpg",
        "map": "https://maps.example.com/embed?q=hinjewadi",
        "keypoints": [
          {"title": "IT Hub", "description": "Rajiv Gandhi Infotech Park"},
          {"title": "Metro", "description": "Line 3 under construction"}
        ],
        "about": "Western Pune's technology corridor.",
        "developmentPlans": "Ring road and metro extension.",
        "investmentPotential": "Steady rental demand.",
        "connectivity": "Mumbai-Bangalore highway access.",
        "projects": {
          "Skyline Towers": {
            "images": ["img/skyline-1.jpg", "img/skyline-2.jpg", "img/skyline-3.jpg"],
            "description": "Twin towers with 2 and 3 BHK homes.",
            "benefits": "Walk to work.",
            "features": ["Clubhouse", "Pool"],
            "connectivity": ["5 min to Phase 1"],
            "investment": ["8% yearly appreciation"],
            "map": "https://maps.example.com/embed?q=skyline",
            "brochureUrl": "https://cdn.example.com/skyline.pdf",
            "videoThumbnail": "video/skyline.mp4"
          },
          "Green <Meadows>": {
            "images": ["img/meadows-1.jpg"],
            "description": "Low-rise \"garden\" homes & villas.",
            "benefits": "Open space.",
            "features": ["Garden"],
            "connectivity": [],
            "investment": [],
            "map": "https://maps.example.com/embed?q=meadows",
            "brochureUrl": "https://cdn.example.com/meadows.pdf"
          }
        }
      },
      "Baner": {
        "thumbnail": "img/baner.jpg",
        "map": "https://maps.example.com/embed?q=baner",
        "keypoints": [],
        "about": "",
        "developmentPlans": "",
        "investmentPotential": "",
        "connectivity": "",
        "projects": {}
      }
    }
  }
}"#;
}
