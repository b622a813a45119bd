use serde::Deserialize;
use std::env;
use std::fs;
use tracing::{info, warn};

use crate::error::ConfigError;

/// Model names used by the LLM adapters. Overridable via config.yaml.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub groq: String,
    pub gemini: String,
    pub anthropic: String,
    pub openai: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            groq: "llama-3.3-70b-versatile".to_string(),
            gemini: "gemini-2.0-flash".to_string(),
            anthropic: "claude-sonnet-4-20250514".to_string(),
            openai: "gpt-4o-mini".to_string(),
        }
    }
}

/// Per-provider credentials, resolved from the environment once at startup.
/// A missing key makes that adapter unavailable; it is never a startup error.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub finnhub_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            finnhub_api_key: non_empty_var("FINNHUB_API_KEY"),
            groq_api_key: non_empty_var("GROQ_API_KEY"),
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            anthropic_api_key: non_empty_var("ANTHROPIC_API_KEY"),
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => {
            info!("{} not set - that provider will be skipped", name);
            None
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Ordered, display-meaningful default watchlist served to new sessions.
    pub watchlist: Vec<String>,
    /// Client poll interval hint, seconds. The core itself never polls.
    pub poll_interval_secs: u64,
    pub models: ModelConfig,

    #[serde(skip)]
    pub credentials: Credentials,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            watchlist: [
                "AAPL", "AMZN", "GOOGL", "MSFT", "NVDA", "META", "TSLA", "BTC-USD", "ETH-USD",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            poll_interval_secs: 15,
            models: ModelConfig::default(),
            credentials: Credentials::default(),
        }
    }
}

impl AppConfig {
    /// Load config.yaml if present, otherwise built-in defaults. Credentials
    /// always come from the environment. A broken config file is logged and
    /// ignored rather than aborting startup.
    pub fn load() -> Self {
        let mut config = match Self::read_file("config.yaml") {
            Ok(c) => c,
            Err(ConfigError::Read { .. }) => AppConfig::default(),
            Err(e) => {
                warn!("config.yaml ignored: {}", e);
                AppConfig::default()
            }
        };
        config.credentials = Credentials::from_env();
        config.dedup_watchlist();
        config
    }

    fn read_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        serde_yaml::from_str(content)
    }

    /// Watchlist is an ordered set: first occurrence wins.
    pub fn dedup_watchlist(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.watchlist.retain(|s| seen.insert(s.clone()));
    }
}
