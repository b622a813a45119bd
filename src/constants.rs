//! Application-wide constants and magic numbers
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make the codebase easier to tune.

/// Chart range handling
pub mod ranges {
    /// The fixed range/interval pairs the terminal supports, in display order.
    /// (range, interval, label)
    pub const SUPPORTED: &[(&str, &str, &str)] = &[
        ("1d", "5m", "1D"),
        ("5d", "15m", "5D"),
        ("1mo", "30m", "1M"),
        ("3mo", "1d", "3M"),
        ("6mo", "1d", "6M"),
        ("1y", "1wk", "1Y"),
        ("5y", "1mo", "5Y"),
    ];

    pub const DEFAULT_RANGE: &str = "3mo";
    pub const DEFAULT_INTERVAL: &str = "1d";

    /// Synthetic chart length per range.
    pub fn point_count(range: &str) -> usize {
        match range {
            "1d" => 78,
            "5d" => 40,
            "1mo" => 22,
            "3mo" => 63,
            "6mo" => 126,
            "1y" => 52,
            "5y" => 60,
            _ => 63,
        }
    }

    /// Seconds between synthetic chart points per range.
    pub fn step_seconds(range: &str) -> i64 {
        match range {
            "1d" => 300,
            "5d" => 7_200,
            "1mo" | "3mo" | "6mo" => 86_400,
            "1y" => 604_800,
            "5y" => 2_592_000,
            _ => 86_400,
        }
    }
}

/// Upstream HTTP constants
pub mod http {
    /// Browser user agent required by the Yahoo endpoints.
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

    /// Max upstream error body characters kept in logs and attempt events.
    pub const ERROR_DETAIL_MAX: usize = 200;
}

/// Quote scrape adapter limits
pub mod scrape {
    /// Cap on concurrent per-symbol lookups within one batch.
    pub const MAX_CONCURRENT_SYMBOLS: usize = 10;
}

/// Synthetic data tuning
pub mod synth {
    /// Per-step volatility of the synthetic price walk.
    pub const EQUITY_VOLATILITY: f64 = 0.015;
    pub const CRYPTO_VOLATILITY: f64 = 0.03;

    /// A step never drops the walk below this fraction of its running value.
    pub const WALK_FLOOR_RATIO: f64 = 0.7;
}

/// Local rule-based analysis scoring
pub mod scoring {
    pub const SMA_POINTS: i32 = 2;
    pub const RSI_POINTS: i32 = 2;
    pub const DAILY_MOVE_POINTS: i32 = 1;

    pub const RSI_OVERBOUGHT: f64 = 70.0;
    pub const RSI_OVERSOLD: f64 = 30.0;
    pub const DAILY_MOVE_THRESHOLD_PCT: f64 = 2.0;
    pub const VOLUME_SURGE_RATIO: f64 = 1.5;

    pub const CONFIDENCE_BASE: i32 = 40;
    pub const CONFIDENCE_PER_POINT: i32 = 10;
    pub const CONFIDENCE_CAP: i32 = 85;
}
