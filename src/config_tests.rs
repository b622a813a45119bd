//! Unit tests for configuration loading and defaults.

#[cfg(test)]
mod config_tests {
    use crate::config::{AppConfig, ModelConfig};

    #[test]
    fn test_default_bind_addr() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_default_watchlist_ordered() {
        let config = AppConfig::default();
        assert_eq!(config.watchlist.first().map(String::as_str), Some("AAPL"));
        assert!(config.watchlist.contains(&"BTC-USD".to_string()));
        assert_eq!(config.watchlist.len(), 9);
    }

    #[test]
    fn test_default_models() {
        let models = ModelConfig::default();
        assert_eq!(models.groq, "llama-3.3-70b-versatile");
        assert_eq!(models.openai, "gpt-4o-mini");
    }

    #[test]
    fn test_from_yaml_partial_overrides() {
        let config = AppConfig::from_yaml(
            "bind_addr: \"127.0.0.1:8080\"\nwatchlist: [TSLA, NVDA]\n",
        )
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.watchlist, vec!["TSLA", "NVDA"]);
        // Unspecified fields keep their defaults
        assert_eq!(config.poll_interval_secs, 15);
        assert_eq!(config.models.gemini, "gemini-2.0-flash");
    }

    #[test]
    fn test_from_yaml_with_bom() {
        let config = AppConfig::from_yaml("\u{feff}bind_addr: \"0.0.0.0:9000\"\n").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(AppConfig::from_yaml("watchlist: {not: [a, list").is_err());
    }

    #[test]
    fn test_watchlist_dedup_keeps_first_occurrence() {
        let mut config = AppConfig::from_yaml("watchlist: [AAPL, MSFT, AAPL, TSLA, MSFT]\n").unwrap();
        config.dedup_watchlist();
        assert_eq!(config.watchlist, vec!["AAPL", "MSFT", "TSLA"]);
    }

    #[test]
    fn test_credentials_default_to_none() {
        let config = AppConfig::default();
        assert!(config.credentials.finnhub_api_key.is_none());
        assert!(config.credentials.groq_api_key.is_none());
    }
}
