use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub max_age_seconds: u64,
}

/// Intake policy: the message length cap plus the spam-screen thresholds
/// and word lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub max_message_chars: usize,
    pub url_flood_threshold: usize,
    pub repeat_run_length: usize,
    pub spam_keywords: Vec<String>,
    pub spam_phrases: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            max_age_seconds: 86400,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_message_chars: 2000,
            url_flood_threshold: 3,
            repeat_run_length: 11,
            spam_keywords: vec![
                "bitcoin".to_string(),
                "crypto".to_string(),
                "investment".to_string(),
                "loan".to_string(),
                "casino".to_string(),
                "gambling".to_string(),
            ],
            spam_phrases: vec![
                "click here".to_string(),
                "visit now".to_string(),
                "act now".to_string(),
                "limited time".to_string(),
            ],
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.cors.allow_origin.is_empty() {
            return Err(ConfigError::Message(
                "CORS allow-origin cannot be empty".to_string(),
            ));
        }

        if self.contact.max_message_chars == 0 {
            return Err(ConfigError::Message(
                "Message length cap must be greater than 0".to_string(),
            ));
        }

        if self.contact.url_flood_threshold == 0 {
            return Err(ConfigError::Message(
                "URL flood threshold must be greater than 0".to_string(),
            ));
        }

        if self.contact.repeat_run_length < 2 {
            return Err(ConfigError::Message(
                "Repeat run length must be at least 2".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
