pub mod settings;

pub use settings::{AppConfig, ContactConfig, CorsConfig, ServerConfig};
