//! Contact form intake handler

use crate::{
    contact::models::{
        ClientMeta, ContactForm, ContactResponse, RejectReason, SanitizedSubmission,
        SubmissionRecord, ACCEPTED_MESSAGE,
    },
    error::{AppError, Result},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

pub async fn handle_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: std::result::Result<Json<ContactForm>, JsonRejection>,
) -> Result<impl IntoResponse> {
    // A body that cannot be parsed is an unexpected failure, not a
    // validation rejection.
    let Json(form) = payload.map_err(|rejection| AppError::MalformedBody(rejection.to_string()))?;

    let meta = ClientMeta::from_headers(&headers);
    let submission = SanitizedSubmission::from_form(form);

    match state.validator.validate(&submission) {
        Ok(()) => {
            let record = SubmissionRecord::new(&submission, &meta);
            info!(
                name = %record.name,
                email = %record.email,
                body = %record.message,
                timestamp = %record.timestamp,
                ip = %record.ip,
                user_agent = %record.user_agent,
                "contact form submission"
            );

            // TODO: hand the record to an outbound mailer once delivery exists.

            Ok((
                StatusCode::OK,
                Json(ContactResponse::success(ACCEPTED_MESSAGE)),
            ))
        }
        Err(reason) => {
            if reason == RejectReason::SuspectedSpam {
                warn!(
                    name = %submission.name,
                    email = %submission.email,
                    ip = %meta.ip,
                    "potential spam detected"
                );
            }

            Ok((
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::error(reason.user_message())),
            ))
        }
    }
}
