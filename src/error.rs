use thiserror::Error;

use crate::types::{Check, InvalidInput};
use crate::constants;

#[derive(Error, Debug)]
pub enum EstateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("No catalog data for city: {0}")]
    CityNotFound(String),

    #[error("No location '{location}' in {city}")]
    LocationNotFound { city: String, location: String },

    #[error("No project '{project}' at {location}")]
    ProjectNotFound { location: String, project: String },

    #[error("Image index {index} out of range ({len} images)")]
    ImageOutOfRange { index: usize, len: usize },

    #[error("No project is open")]
    NoProjectOpen,

    #[error("Catalog {field} has a disallowed URL: {url}")]
    UnsafeUrl { field: String, url: String },
}

pub type Result<T> = std::result::Result<T, EstateError>;

/// Terminal outcome of a failed submission attempt. None of these leave the
/// attempt they belong to; the user resubmits to try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    #[error("invalid input: {0}")]
    InputInvalid(InvalidInput),

    #[error("{check} rejected: {reason}")]
    Rejected { check: Check, reason: String },

    #[error("{check} verification unavailable: {reason}")]
    ServiceUnavailable { check: Check, reason: String },

    #[error("notification delivery failed: {0}")]
    DeliveryFailure(String),
}

impl SubmissionFailure {
    /// Message shown in the form's error indicator.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionFailure::InputInvalid(InvalidInput::MissingRequiredFields) => {
                constants::MSG_MISSING_FIELDS
            }
            SubmissionFailure::InputInvalid(InvalidInput::BadEmailFormat) => constants::MSG_BAD_EMAIL,
            SubmissionFailure::InputInvalid(InvalidInput::BadPhoneFormat) => constants::MSG_BAD_PHONE,
            SubmissionFailure::Rejected { check: Check::Email, .. } => constants::MSG_EMAIL_REJECTED,
            SubmissionFailure::Rejected { check: Check::Phone, .. } => constants::MSG_PHONE_REJECTED,
            SubmissionFailure::ServiceUnavailable { check: Check::Email, .. } => {
                constants::MSG_EMAIL_UNAVAILABLE
            }
            SubmissionFailure::ServiceUnavailable { check: Check::Phone, .. } => {
                constants::MSG_PHONE_UNAVAILABLE
            }
            SubmissionFailure::DeliveryFailure(_) => constants::MSG_DELIVERY_FAILED,
        }
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionFailure::InputInvalid(_) => "input_invalid",
            SubmissionFailure::Rejected { .. } => "rejected",
            SubmissionFailure::ServiceUnavailable { .. } => "service_unavailable",
            SubmissionFailure::DeliveryFailure(_) => "delivery_failure",
        }
    }
}
