use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AppError, AppResult};
use crate::services::MAX_TICKETS_PER_BATCH;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Ticket generation limits applied by the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Tickets generated when the request omits `count`
    #[serde(default = "default_count")]
    pub default_count: u32,
    /// Largest accepted `count` (never above the engine ceiling)
    #[serde(default = "max_count")]
    pub max_count: u32,
}

fn default_count() -> u32 {
    5
}

fn max_count() -> u32 {
    MAX_TICKETS_PER_BATCH
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            max_count: max_count(),
        }
    }
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // A missing file is fine: defaults plus environment variables
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::from_toml_str(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No config file at {config_path}, using defaults");
                Config::default()
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "Failed to read config file {config_path}: {e}"
                )));
            }
        };

        config.apply_env_overrides();
        config.normalize();
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> AppResult<Self> {
        toml::from_str(s)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {e}")))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            self.server.port = p;
        }
        if let Ok(v) = env::var("TICKETS_DEFAULT_COUNT")
            && let Ok(n) = v.parse()
        {
            self.generator.default_count = n;
        }
        if let Ok(v) = env::var("TICKETS_MAX_COUNT")
            && let Ok(n) = v.parse()
        {
            self.generator.max_count = n;
        }
    }

    /// Keeps `1 <= default_count <= max_count <= MAX_TICKETS_PER_BATCH`.
    pub fn normalize(&mut self) {
        let generator = &mut self.generator;
        generator.max_count = generator.max_count.clamp(1, MAX_TICKETS_PER_BATCH);
        generator.default_count = generator.default_count.clamp(1, generator.max_count);
    }
}
