//! Contact submission pipeline and project catalog for a real-estate site

pub mod app;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod infra;
pub mod observability;
pub mod types;
pub mod validation;

pub use app::submission_use_case::SubmissionUseCase;
pub use error::{EstateError, Result, SubmissionFailure};
pub use types::{SubmissionInput, UiState, ValidationResult, VerificationResult};
