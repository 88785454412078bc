//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::contact::models::{ContactResponse, SERVER_ERROR_MESSAGE};

pub type Result<T> = std::result::Result<T, AppError>;

/// Unexpected failures only. Validation rejections are ordinary control flow
/// and never pass through here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(cause = %self, "request failed unexpectedly");

        let body = Json(ContactResponse::error(SERVER_ERROR_MESSAGE));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
