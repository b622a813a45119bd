//! Custom error types for the data-acquisition layer
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

/// Result alias used by every provider adapter.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Everything that can go wrong talking to one upstream provider.
///
/// The orchestrators treat all variants identically: log the provider name
/// and a truncated detail, then move on to the next provider in the chain.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// 2xx response missing the expected field path or empty result set.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// Text that was supposed to be structured JSON failed to parse,
    /// even after stripping code fences.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Required credential not configured. The adapter is skipped, which the
    /// orchestrator handles the same way as a network failure.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Configuration / startup errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

/// Truncate upstream error bodies before they hit the logs.
pub fn truncate_detail(detail: &str, max: usize) -> String {
    if detail.len() <= max {
        detail.to_string()
    } else {
        let mut end = max;
        while !detail.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &detail[..end])
    }
}
