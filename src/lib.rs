//! Ticker Terminal - market data aggregation backend
//!
//! This library provides the multi-provider data-acquisition layer behind
//! the terminal UI: ordered provider fallback for quotes, charts, and AI
//! analysis, with degraded-mode synthesis when every live source fails.

pub mod api;
pub mod bus;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod indicators;
pub mod llm;
pub mod models;
pub mod providers;
pub mod services;
pub mod synth;

// Re-export commonly used types
pub use bus::EventBus;
pub use config::AppConfig;
pub use events::{AttemptEvent, AttemptOutcome, DataKind, Event};
pub use models::{AnalysisContext, AnalysisResult, ChartSeries, Quote};

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod indicators_tests;
#[cfg(test)]
mod synth_tests;
