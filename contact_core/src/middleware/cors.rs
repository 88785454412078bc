//! CORS (Cross-Origin Resource Sharing) middleware

use crate::{config::CorsConfig, AppState};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Answers preflight probes before routing or body handling, and stamps the
/// allow-origin header onto every outgoing response.
pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        preflight_response(&state.cors)
    } else {
        next.run(request).await
    };

    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin(&state.cors));

    response
}

fn preflight_response(config: &CorsConfig) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    if let Ok(max_age) = HeaderValue::from_str(&config.max_age_seconds.to_string()) {
        headers.insert(header::ACCESS_CONTROL_MAX_AGE, max_age);
    }

    (StatusCode::OK, headers).into_response()
}

fn allow_origin(config: &CorsConfig) -> HeaderValue {
    HeaderValue::from_str(&config.allow_origin)
        .unwrap_or_else(|_| HeaderValue::from_static("*"))
}
