use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default upstream endpoint for the Gemini REST API.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for chat completions.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    pub model: String,
    /// Base URL up to and including the API version segment.
    pub api_base: String,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
        }
    }
}

impl RelayConfig {
    /// Read the relay configuration once at startup.
    ///
    /// Fails when `GEMINI_API_KEY` is absent or empty.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(RelayConfig {
            common,
            gemini: GeminiSettings {
                api_key: Secret::new(get_env("GEMINI_API_KEY", None)?),
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL))?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE))?
                    .trim_end_matches('/')
                    .to_string(),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} environment variable is required",
                key
            ))),
        },
    }
}
