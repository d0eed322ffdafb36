//! Read-only city → location → project catalog and its page-view session.

pub mod model;
pub mod render;
pub mod session;

pub use model::{Catalog, City, Keypoint, Location, Project};
pub use session::{BrochureDownload, BrowserSession, Modal, ZoomDirection};
