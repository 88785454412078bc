//! Core library for the contact intake service: domain validation, spam
//! screening, HTTP handlers and server assembly.

pub mod config;
pub mod contact;
pub mod error;
pub mod handlers;
pub mod middleware;

pub use config::{AppConfig, ContactConfig, CorsConfig, ServerConfig};
pub use contact::{
    ContactForm, ContactResponse, ContactValidator, RejectReason, SanitizedSubmission, SpamFilter,
};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;

use axum::{middleware as axum_middleware, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub cors: CorsConfig,
    pub validator: ContactValidator,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let validator = ContactValidator::from_config(&config.contact)?;

        Ok(Self {
            app_name: "Contact Intake API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            cors: config.cors.clone(),
            validator,
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::logging::logging_layer())
                .layer(axum_middleware::from_fn_with_state(
                    state.clone(),
                    middleware::cors::cors_middleware,
                )),
        )
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
