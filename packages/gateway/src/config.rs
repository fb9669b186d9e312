//! Settings are layered the usual way: built-in defaults, then an optional
//! `config.toml` next to the binary, then the process environment (the web
//! binary loads `.env` into it at startup). Nested keys use a double underscore, so
//! `COMPLETION__MODEL=...` overrides `completion.model`.

use std::fmt;

use civic::REQUIRED_KEYS;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_COMPLETION_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionSettings {
    pub url: String,
    pub model: String,
    pub temperature: f64,
}

/// Raw settings as read from all sources. Credentials may still be absent.
#[derive(Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
    pub completion: CompletionSettings,
}

impl Settings {
    /// Defaults, then `config.toml` if present, then the process environment.
    /// A `.env` file must already have been loaded by the binary.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(
                    File::with_name("config.toml")
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(Environment::default().separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder
            .set_default("completion.url", DEFAULT_COMPLETION_URL)?
            .set_default("completion.model", DEFAULT_MODEL)?
            .set_default("completion.temperature", DEFAULT_TEMPERATURE)?
            .build()?
            .try_deserialize()
    }
}

/// Validated configuration: every credential is present and non-blank.
#[derive(Clone)]
pub struct AppConfig {
    pub completion_key: String,
    pub backend_url: String,
    pub backend_key: String,
    pub completion: CompletionSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_settings(Settings::load()?)
    }

    pub fn from_settings(settings: Settings) -> Result<Self, ConfigError> {
        let values = (
            present(settings.groq_api_key),
            present(settings.supabase_url),
            present(settings.supabase_anon_key),
        );

        match values {
            (Some(completion_key), Some(backend_url), Some(backend_key)) => Ok(Self {
                completion_key,
                backend_url: backend_url.trim_end_matches('/').to_string(),
                backend_key,
                completion: settings.completion,
            }),
            (groq, url, anon) => {
                let absent = [groq.is_none(), url.is_none(), anon.is_none()];
                let missing = REQUIRED_KEYS
                    .into_iter()
                    .zip(absent)
                    .filter_map(|(key, absent)| absent.then_some(key))
                    .collect();
                Err(ConfigError::Missing(missing))
            }
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("completion_key", &"<redacted>")
            .field("backend_url", &self.backend_url)
            .field("backend_key", &"<redacted>")
            .field("completion", &self.completion)
            .finish()
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
