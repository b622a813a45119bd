//! Canonical records returned by the data-acquisition layer.
//!
//! Every provider adapter normalizes its native payload into one of these
//! shapes; nothing provider-specific crosses this boundary. Field names
//! serialize in Yahoo's camelCase convention because the terminal UI keys
//! off those names regardless of which provider actually answered.

use serde::{Deserialize, Serialize};

/// One normalized quote record. Built fresh on every poll cycle and
/// superseded wholesale by the next one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub symbol: String,
    pub short_name: String,
    pub regular_market_price: f64,
    pub regular_market_change: f64,
    /// `None` when the previous close is zero and the percentage is undefined.
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_previous_close: f64,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub average_daily_volume_10_day: Option<u64>,
    pub market_cap: Option<u64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub trailing_eps: Option<f64>,
    pub beta: Option<f64>,
    pub fifty_day_average: Option<f64>,
    pub two_hundred_day_average: Option<f64>,
}

impl Quote {
    /// 100 × change / previousClose, or `None` when previousClose is zero.
    pub fn percent_change(change: f64, previous_close: f64) -> Option<f64> {
        if previous_close == 0.0 {
            None
        } else {
            Some(100.0 * change / previous_close)
        }
    }
}

/// A batch of quotes plus the provenance of the provider that produced them.
#[derive(Clone, Debug, Serialize)]
pub struct QuoteBatch {
    pub records: Vec<Quote>,
    pub provider: String,
}

/// One bar of an OHLC series. `close` is guaranteed present: points whose
/// close was null upstream are dropped before the series is surfaced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: i64,
    /// Range-dependent display label ("14:30", "Mon 09:45", "Jan 5").
    pub label: String,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: u64,
}

/// Ordered (time ascending) series for one (symbol, range, interval) tuple.
/// Regenerated wholesale on every fetch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartSeries {
    pub symbol: String,
    pub range: String,
    pub interval: String,
    pub points: Vec<ChartPoint>,
}

/// A chart series plus provenance.
#[derive(Clone, Debug, Serialize)]
pub struct ChartResponse {
    #[serde(flatten)]
    pub series: ChartSeries,
    pub provider: String,
}

/// Display label for a chart point, matching what the terminal renders on
/// the x axis: intraday time for 1d, weekday+time for 5d, calendar date
/// otherwise.
pub fn point_label(range: &str, timestamp: i64) -> String {
    use chrono::{TimeZone, Utc};
    let dt = match Utc.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt,
        None => return timestamp.to_string(),
    };
    match range {
        "1d" => dt.format("%H:%M").to_string(),
        "5d" => dt.format("%a %H:%M").to_string(),
        _ => dt.format("%b %-d").to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Bull,
    Bear,
    Neutral,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TechnicalSignal {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SignalKind,
    pub detail: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyLevels {
    pub support: f64,
    pub resistance: f64,
}

/// Parsed analysis payload, identical in shape no matter which LLM (or the
/// local rule-based path) produced it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub signal: Signal,
    pub confidence: u8,
    pub summary: String,
    #[serde(default)]
    pub technicals: Vec<TechnicalSignal>,
    pub key_levels: Option<KeyLevels>,
    #[serde(default)]
    pub short_term_outlook: String,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub beginner_notes: String,
}

/// The numeric context an analysis request is rendered from. All fields are
/// optional; the prompt builder degrades each missing value to "N/A" instead
/// of failing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisContext {
    pub symbol: String,
    pub price: Option<f64>,
    /// Percent change on the day.
    pub change: Option<f64>,
    pub pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub high52: Option<f64>,
    pub low52: Option<f64>,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub rsi: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,
    pub volume: Option<f64>,
    pub avg_volume: Option<f64>,
}

/// Structured failure returned when the whole analysis chain is exhausted.
/// The UI renders this as the analysis body instead of crashing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
    #[serde(default)]
    pub detail: String,
}
