//! Local validation of contact form input. Pure: no I/O, no UI.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{InvalidInput, SubmissionInput, ValidatedSubmission, ValidationResult};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// Apply the form rules in order; the first failing rule decides the result.
pub fn validate(input: &SubmissionInput) -> ValidationResult {
    let name = input.name.trim();
    let email = input.email.trim();
    let phone = input.phone.trim();
    let message = input.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return ValidationResult::Invalid(InvalidInput::MissingRequiredFields);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return ValidationResult::Invalid(InvalidInput::BadEmailFormat);
    }

    if !phone.is_empty() && !PHONE_PATTERN.is_match(phone) {
        return ValidationResult::Invalid(InvalidInput::BadPhoneFormat);
    }

    let phone = (!phone.is_empty()).then(|| phone.to_string());
    ValidationResult::Valid(ValidatedSubmission::new(
        name.to_string(),
        email.to_string(),
        phone,
        message.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, phone: &str, message: &str) -> SubmissionInput {
        SubmissionInput {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_without_phone() {
        match validate(&input("Jane", "jane@x.com", "", "hi")) {
            ValidationResult::Valid(submission) => {
                assert_eq!(submission.name(), "Jane");
                assert_eq!(submission.phone(), None);
            }
            other => panic!("expected valid, got {:?}", other),
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        match validate(&input("  Jane ", " jane@x.com\t", " 9876543210 ", " hi ")) {
            ValidationResult::Valid(submission) => {
                assert_eq!(submission.name(), "Jane");
                assert_eq!(submission.email(), "jane@x.com");
                assert_eq!(submission.phone(), Some("9876543210"));
                assert_eq!(submission.message(), "hi");
            }
            other => panic!("expected valid, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_fields() {
        let cases = [
            input("", "jane@x.com", "", "hi"),
            input("Jane", "", "", "hi"),
            input("Jane", "jane@x.com", "", ""),
            input("   ", "jane@x.com", "", "hi"),
            input("Jane", "jane@x.com", "", " \n "),
        ];
        for case in &cases {
            assert_eq!(
                validate(case),
                ValidationResult::Invalid(InvalidInput::MissingRequiredFields),
                "case: {:?}",
                case
            );
        }
    }

    #[test]
    fn test_missing_fields_wins_over_bad_email() {
        assert_eq!(
            validate(&input("", "not-an-email", "123", "hi")),
            ValidationResult::Invalid(InvalidInput::MissingRequiredFields)
        );
    }

    #[test]
    fn test_bad_email_format() {
        for email in ["jane", "jane@x", "@x.com", "jane@.com", "ja ne@x.com", "jane@@x.com", "jane@x."] {
            assert_eq!(
                validate(&input("Jane", email, "", "hi")),
                ValidationResult::Invalid(InvalidInput::BadEmailFormat),
                "email: {}",
                email
            );
        }
    }

    #[test]
    fn test_bad_email_wins_over_bad_phone() {
        assert_eq!(
            validate(&input("Jane", "jane", "12", "hi")),
            ValidationResult::Invalid(InvalidInput::BadEmailFormat)
        );
    }

    #[test]
    fn test_bad_phone_format() {
        for phone in ["123", "12345678901", "98765-43210", "+919876543210", "98765 4321", "abcdefghij"] {
            assert_eq!(
                validate(&input("Jane", "jane@x.com", phone, "hi")),
                ValidationResult::Invalid(InvalidInput::BadPhoneFormat),
                "phone: {}",
                phone
            );
        }
    }

    #[test]
    fn test_ten_digit_phone_passes() {
        assert!(validate(&input("Jane", "jane@x.com", "0123456789", "hi")).is_valid());
    }

    #[test]
    fn test_invalid_reasons() {
        assert_eq!(InvalidInput::MissingRequiredFields.to_string(), "missing required fields");
        assert_eq!(InvalidInput::BadEmailFormat.to_string(), "bad email format");
        assert_eq!(InvalidInput::BadPhoneFormat.to_string(), "bad phone format");
    }
}
