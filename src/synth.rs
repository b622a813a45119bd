//! Degraded-mode data synthesis.
//!
//! When every live provider in a quote or chart chain has failed, the
//! orchestrator falls back to this generator so callers always receive a
//! structurally valid response. Base prices per symbol are stable (seed table
//! or a hash of the symbol's characters); the perturbations around them use
//! true randomness, so repeated calls are plausible but not reproducible.
//! All synthesized output is tagged `"fallback"` by the orchestrator so the
//! UI can warn that the data is estimated, never live.

use chrono::Utc;
use rand::Rng;
use std::collections::HashMap;

use crate::constants::{ranges, synth};
use crate::models::{point_label, ChartPoint, ChartSeries, Quote};

/// Seed table of known symbols to plausible base prices, injected into the
/// synthesizer at construction so it can be swapped without touching
/// orchestration logic.
#[derive(Clone, Debug)]
pub struct ReferenceData {
    base_prices: HashMap<&'static str, f64>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        let base_prices = HashMap::from([
            ("AAPL", 228.0),
            ("AMZN", 210.0),
            ("GOOGL", 198.0),
            ("GOOG", 199.0),
            ("MSFT", 420.0),
            ("NVDA", 129.0),
            ("META", 680.0),
            ("TSLA", 382.0),
            ("NFLX", 985.0),
            ("AMD", 119.0),
            ("CRM", 330.0),
            ("ORCL", 185.0),
            ("INTC", 23.0),
            ("QCOM", 175.0),
            ("AVGO", 225.0),
            ("PLTR", 110.0),
            ("COIN", 290.0),
            ("SQ", 85.0),
            ("SHOP", 115.0),
            ("UBER", 78.0),
            ("ABNB", 155.0),
            ("SNAP", 12.0),
            ("PINS", 37.0),
            ("ROKU", 95.0),
            ("BTC-USD", 97_500.0),
            ("ETH-USD", 3_180.0),
            ("SOL-USD", 210.0),
            ("DOGE-USD", 0.32),
            ("XRP-USD", 2.45),
            ("ADA-USD", 0.98),
            ("AVAX-USD", 38.0),
            ("SPY", 608.0),
            ("QQQ", 530.0),
            ("VOO", 558.0),
            ("IWM", 228.0),
        ]);
        Self { base_prices }
    }
}

impl ReferenceData {
    /// Known base price, or one hashed from the symbol's first and last
    /// character codes so unknown symbols are stable per symbol.
    pub fn base_price(&self, symbol: &str) -> f64 {
        if let Some(price) = self.base_prices.get(symbol) {
            return *price;
        }
        let first = symbol.chars().next().map(|c| c as u32).unwrap_or(65);
        let last = symbol.chars().last().map(|c| c as u32).unwrap_or(65);
        50.0 + ((first * 13 + last * 7) % 400) as f64
    }
}

pub fn is_crypto(symbol: &str) -> bool {
    symbol.ends_with("-USD")
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[derive(Clone, Debug)]
pub struct Synthesizer {
    reference: ReferenceData,
}

impl Synthesizer {
    pub fn new(reference: ReferenceData) -> Self {
        Self { reference }
    }

    /// Exactly one record per requested symbol, every numeric field finite.
    pub fn quotes(&self, symbols: &[String]) -> Vec<Quote> {
        let mut rng = rand::thread_rng();
        symbols
            .iter()
            .map(|symbol| {
                let base = self.reference.base_price(symbol);
                let pct: f64 = (rng.gen::<f64>() - 0.5) * 3.0;
                let chg = base * pct / 100.0;
                let pe = 15.0 + rng.gen::<f64>() * 35.0;
                Quote {
                    symbol: symbol.clone(),
                    short_name: symbol.trim_end_matches("-USD").to_string(),
                    regular_market_price: round2(base + chg),
                    regular_market_change: round2(chg),
                    regular_market_change_percent: Quote::percent_change(
                        round2(chg),
                        round2(base),
                    ),
                    regular_market_previous_close: round2(base),
                    regular_market_open: Some(round2(base + chg * 0.3)),
                    regular_market_day_high: Some(round2(base + chg.abs() * 1.3)),
                    regular_market_day_low: Some(round2(base - chg.abs() * 0.8)),
                    fifty_two_week_high: Some(round2(base * 1.25)),
                    fifty_two_week_low: Some(round2(base * 0.65)),
                    regular_market_volume: Some(
                        (30e6 + rng.gen::<f64>() * 80e6) as u64,
                    ),
                    average_daily_volume_10_day: Some(
                        (40e6 + rng.gen::<f64>() * 30e6) as u64,
                    ),
                    market_cap: Some((base * (2e9 + rng.gen::<f64>() * 1e12)) as u64),
                    trailing_pe: Some(round2(pe)),
                    forward_pe: Some(round2(12.0 + rng.gen::<f64>() * 28.0)),
                    trailing_eps: Some(round2(base / pe)),
                    beta: Some(round2(0.8 + rng.gen::<f64>() * 1.2)),
                    fifty_day_average: Some(round2(base * (0.95 + rng.gen::<f64>() * 0.1))),
                    two_hundred_day_average: Some(
                        round2(base * (0.88 + rng.gen::<f64>() * 0.15)),
                    ),
                }
            })
            .collect()
    }

    /// Price random walk of fixed length per range, ending at the symbol's
    /// base price. A step never drops below 70% of the running value.
    pub fn chart(&self, symbol: &str, range: &str, interval: &str) -> ChartSeries {
        let mut rng = rand::thread_rng();
        let base = self.reference.base_price(symbol);
        let volatility = if is_crypto(symbol) {
            synth::CRYPTO_VOLATILITY
        } else {
            synth::EQUITY_VOLATILITY
        };

        let count = ranges::point_count(range);
        let step = ranges::step_seconds(range);
        let now = Utc::now().timestamp();

        let mut price = base * (0.88 + rng.gen::<f64>() * 0.12);
        let mut points = Vec::with_capacity(count);
        for i in 0..count {
            let change = (rng.gen::<f64>() - 0.48) * volatility * price;
            price = (price * synth::WALK_FLOOR_RATIO).max(price + change);
            let timestamp = now - (count as i64 - i as i64) * step;
            points.push(ChartPoint {
                timestamp,
                label: point_label(range, timestamp),
                open: Some(round2(price - change * 0.3)),
                high: Some(round2(price + change.abs() * 0.5)),
                low: Some(round2(price - change.abs() * 0.5)),
                close: round2(price),
                volume: (20e6 + rng.gen::<f64>() * 80e6) as u64,
            });
        }
        // Last point settles on the reference price.
        if let Some(last) = points.last_mut() {
            last.close = round2(base);
        }

        ChartSeries {
            symbol: symbol.to_string(),
            range: range.to_string(),
            interval: interval.to_string(),
            points,
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(ReferenceData::default())
    }
}
