use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::PHONE_NOT_PROVIDED;

/// Raw field values captured from the contact form on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

/// A submission that passed local validation. Only `validation::validate`
/// builds one, so notifications can never be made from unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
}

impl ValidatedSubmission {
    pub(crate) fn new(name: String, email: String, phone: Option<String>, message: String) -> Self {
        Self { name, email, phone, message }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn admin_notification(&self) -> AdminNotification {
        AdminNotification {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_else(|| PHONE_NOT_PROVIDED.to_string()),
            message: self.message.clone(),
        }
    }

    pub fn user_confirmation(&self) -> UserConfirmation {
        UserConfirmation {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("missing required fields")]
    MissingRequiredFields,
    #[error("bad email format")]
    BadEmailFormat,
    #[error("bad phone format")]
    BadPhoneFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(ValidatedSubmission),
    Invalid(InvalidInput),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// Which external check produced a verification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    Email,
    Phone,
}

impl Check {
    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Email => "email",
            Check::Phone => "phone",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one external check. `ServiceUnavailable` is an infrastructure
/// failure and never means the input itself is bad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Verified,
    Rejected(String),
    ServiceUnavailable(String),
}

impl VerificationResult {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationResult::Verified => "verified",
            VerificationResult::Rejected(_) => "rejected",
            VerificationResult::ServiceUnavailable(_) => "service_unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Success,
    Failure(String),
}

/// Template parameters for the message sent to the business admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminNotification {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
}

/// Template parameters for the confirmation sent back to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserConfirmation {
    pub from_name: String,
    pub from_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl UiState {
    pub fn label(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Submitting => "submitting",
            UiState::Success => "success",
            UiState::Error(_) => "error",
        }
    }
}
