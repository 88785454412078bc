//! Ordered validation pipeline for sanitized submissions

use crate::{
    config::ContactConfig,
    contact::{
        models::{RejectReason, SanitizedSubmission},
        rules, SpamFilter,
    },
};

/// Runs the intake checks in a fixed order with first-failure short-circuit:
/// required fields, email format, message length, spam screen. Stateless per
/// request; the same input always yields the same outcome.
#[derive(Debug, Clone)]
pub struct ContactValidator {
    max_message_chars: usize,
    spam: SpamFilter,
}

impl ContactValidator {
    pub fn from_config(config: &ContactConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            max_message_chars: config.max_message_chars,
            spam: SpamFilter::from_config(config)?,
        })
    }

    pub fn validate(&self, submission: &SanitizedSubmission) -> Result<(), RejectReason> {
        if submission.name.is_empty()
            || submission.email.is_empty()
            || submission.message.is_empty()
        {
            return Err(RejectReason::MissingFields);
        }

        if rules::validate_email_format(&submission.email).is_err() {
            return Err(RejectReason::InvalidEmail);
        }

        if rules::validate_message_length(&submission.message, self.max_message_chars).is_err() {
            return Err(RejectReason::MessageTooLong);
        }

        if self.spam.is_spam(&submission.message) {
            return Err(RejectReason::SuspectedSpam);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ContactValidator {
        ContactValidator::from_config(&ContactConfig::default()).unwrap()
    }

    fn submission(name: &str, email: &str, message: &str) -> SanitizedSubmission {
        SanitizedSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_accepts_valid_submission() {
        let validator = validator();
        let input = submission("Jane", "jane@example.com", "Hello, I'd like to connect.");
        assert_eq!(validator.validate(&input), Ok(()));
    }

    #[test]
    fn test_rejects_any_empty_field() {
        let validator = validator();
        assert_eq!(
            validator.validate(&submission("", "jane@example.com", "hi")),
            Err(RejectReason::MissingFields)
        );
        assert_eq!(
            validator.validate(&submission("Jane", "", "hi")),
            Err(RejectReason::MissingFields)
        );
        assert_eq!(
            validator.validate(&submission("Jane", "jane@example.com", "")),
            Err(RejectReason::MissingFields)
        );
    }

    #[test]
    fn test_missing_fields_reported_before_other_failures() {
        let validator = validator();
        // Empty name plus a message that would also trip the spam screen.
        let input = submission("", "not-an-email", "free bitcoin, click here");
        assert_eq!(validator.validate(&input), Err(RejectReason::MissingFields));
    }

    #[test]
    fn test_email_checked_before_length_and_spam() {
        let validator = validator();
        let long_spam = "bitcoin ".repeat(300);
        let input = submission("Jane", "foo@bar", &long_spam);
        assert_eq!(validator.validate(&input), Err(RejectReason::InvalidEmail));
    }

    #[test]
    fn test_length_checked_before_spam() {
        let validator = validator();
        let long_spam = format!("bitcoin {}", "ab".repeat(1000));
        assert!(long_spam.chars().count() > 2000);
        let input = submission("Jane", "jane@example.com", &long_spam);
        assert_eq!(validator.validate(&input), Err(RejectReason::MessageTooLong));
    }

    #[test]
    fn test_spam_is_last_check() {
        let validator = validator();
        let input = submission("Jane", "jane@example.com", "Visit now for free bitcoin!!!");
        assert_eq!(validator.validate(&input), Err(RejectReason::SuspectedSpam));
    }

    #[test]
    fn test_message_at_cap_passes_length_check() {
        let validator = validator();
        let at_cap = "ab".repeat(1000);
        let input = submission("Jane", "jane@example.com", &at_cap);
        assert_eq!(validator.validate(&input), Ok(()));

        let over_cap = format!("{}c", at_cap);
        let input = submission("Jane", "jane@example.com", &over_cap);
        assert_eq!(validator.validate(&input), Err(RejectReason::MessageTooLong));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let validator = validator();
        let input = submission("Jane", "jane@example.com", "Visit now for free bitcoin!!!");
        let first = validator.validate(&input);
        let second = validator.validate(&input);
        assert_eq!(first, second);
    }
}
