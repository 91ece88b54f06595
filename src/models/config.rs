//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub database_url: String,
    pub bind_address: String,
    pub upload_dir: String,
    /// External recognizer command line. Unset leaves the OCR endpoint
    /// reporting unavailable.
    pub ocr_command: Option<String>,
}

impl ServerConfig {
    /// Loads defaults, an optional `substation.yaml` and environment
    /// overrides, in that order.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "data/substation.db")?
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("upload_dir", "uploads")?
            .add_source(File::with_name("substation").required(false))
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}
