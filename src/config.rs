//! Startup configuration.
//!
//! Resolved once from CLI flags and the process environment, then passed by
//! reference to every stage of the run.

use std::env;
use std::fmt;

use clap::ValueEnum;

use crate::error::ConfigError;

/// Environment variable holding the model provider credential.
pub const API_KEY_ENV_VAR: &str = "API_KEY";

/// Default natural language for generated messages.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Default Gemini model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Supported model backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Provider {
    #[default]
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable run configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub provider: Provider,
    pub model: String,
    pub language: String,
}

// Keeps the key out of debug logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("language", &self.language)
            .finish()
    }
}

impl Config {
    /// Build the configuration from already-parsed options and an optional key.
    ///
    /// A missing or blank key is fatal and is reported before anything touches
    /// the network.
    pub fn resolve(
        api_key: Option<String>,
        provider: Provider,
        model: String,
        language: String,
    ) -> Result<Self, ConfigError> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => return Err(ConfigError::MissingApiKey),
        };

        Ok(Self {
            api_key,
            provider,
            model,
            language,
        })
    }

    /// Same as [`Config::resolve`], reading the key from `API_KEY`.
    pub fn from_env(
        provider: Provider,
        model: String,
        language: String,
    ) -> Result<Self, ConfigError> {
        Self::resolve(env::var(API_KEY_ENV_VAR).ok(), provider, model, language)
    }
}
