//! Field-level validation rules for contact submissions

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Minimal local@domain.tld shape, deliberately not RFC 5322.
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ).unwrap();
}

pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("Email cannot be empty"));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("Invalid email format"));
    }

    Ok(())
}

pub fn validate_message_length(message: &str, max_chars: usize) -> Result<(), ValidationError> {
    let len = message.chars().count();

    if len > max_chars {
        return Err(ValidationError::new("Message is too long"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email_format("jane@example.com").is_ok());
        assert!(validate_email_format("a@b.co").is_ok());
        assert!(validate_email_format("foo").is_err());
        assert!(validate_email_format("foo@bar").is_err());
        assert!(validate_email_format("@bar.com").is_err());
        assert!(validate_email_format("foo@bar.").is_err());
        assert!(validate_email_format("foo bar@baz.com").is_err());
        assert!(validate_email_format("").is_err());
    }

    #[test]
    fn test_message_length_boundary() {
        let at_cap = "ab".repeat(1000);
        assert_eq!(at_cap.chars().count(), 2000);
        assert!(validate_message_length(&at_cap, 2000).is_ok());

        let over_cap = format!("{}c", at_cap);
        assert!(validate_message_length(&over_cap, 2000).is_err());
    }

    #[test]
    fn test_message_length_counts_characters_not_bytes() {
        let umlauts = "ä".repeat(10);
        assert!(umlauts.len() > 10);
        assert!(validate_message_length(&umlauts, 10).is_ok());
        assert!(validate_message_length(&umlauts, 9).is_err());
    }
}
