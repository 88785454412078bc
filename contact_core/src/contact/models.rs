//! Request, response and log-event models for the contact endpoint.

use axum::http::{header, HeaderMap};
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const ACCEPTED_MESSAGE: &str = "Vielen Dank! Ihre Nachricht wurde erfolgreich empfangen. Ich werde mich so schnell wie möglich bei Ihnen melden.";
pub const SERVER_ERROR_MESSAGE: &str = "Serverfehler. Bitte versuchen Sie es später erneut.";

const UNKNOWN: &str = "unknown";

/// Raw form body. Fields are optional so that an absent field counts as an
/// empty value during validation instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Submission after sanitization: name and message trimmed, email trimmed
/// and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SanitizedSubmission {
    pub fn from_form(form: ContactForm) -> Self {
        Self {
            name: form.name.as_deref().unwrap_or_default().trim().to_string(),
            email: form
                .email
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            message: form
                .message
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingFields,
    InvalidEmail,
    MessageTooLong,
    SuspectedSpam,
}

impl RejectReason {
    pub fn user_message(&self) -> &'static str {
        match self {
            RejectReason::MissingFields => "Alle Felder sind erforderlich",
            RejectReason::InvalidEmail => "Ungültige E-Mail-Adresse",
            RejectReason::MessageTooLong => "Nachricht ist zu lang",
            RejectReason::SuspectedSpam => {
                "Nachricht konnte nicht gesendet werden. Bitte kontaktieren Sie uns direkt."
            }
        }
    }
}

/// Response body for every outcome of the endpoint. `message` is set on
/// acceptance, `error` on rejection; the unused field is omitted from the
/// serialized JSON.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
        }
    }

    pub fn error(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

/// Origin metadata taken from request headers, for logging only.
#[derive(Debug, Clone)]
pub struct ClientMeta {
    pub ip: String,
    pub user_agent: String,
}

impl ClientMeta {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let ip = headers
            .get("x-forwarded-for")
            .or_else(|| headers.get("x-real-ip"))
            .and_then(|value| value.to_str().ok())
            .unwrap_or(UNKNOWN)
            .to_string();

        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(UNKNOWN)
            .to_string();

        Self { ip, user_agent }
    }
}

/// What gets logged for an accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
    pub ip: String,
    pub user_agent: String,
}

impl SubmissionRecord {
    pub fn new(submission: &SanitizedSubmission, meta: &ClientMeta) -> Self {
        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            timestamp: Utc::now().to_rfc3339(),
            ip: meta.ip.clone(),
            user_agent: meta.user_agent.clone(),
        }
    }
}
