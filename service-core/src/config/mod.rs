use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Load the shared settings from an optional `configuration` file, then the
    /// process environment (`PORT=9000` overrides `port`).
    pub fn load() -> Result<Self, AppError> {
        if dotenvy::dotenv().is_err() {
            tracing::warn!(".env file not found, using system environment variables");
        }

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(environment())
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Process environment as a config source. Empty values count as unset.
fn environment() -> Environment {
    Environment::default().try_parsing(true).ignore_empty(true)
}
