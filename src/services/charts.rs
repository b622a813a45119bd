//! Chart fallback orchestrator. Same protocol as quotes: fixed order,
//! sequential attempts, first non-empty point sequence wins, synthetic
//! series when the chain is exhausted.

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use super::quotes::FALLBACK_PROVIDER;
use super::record_attempt;
use crate::bus::EventBus;
use crate::constants::http::ERROR_DETAIL_MAX;
use crate::error::truncate_detail;
use crate::events::{AttemptOutcome, DataKind};
use crate::models::ChartResponse;
use crate::providers::traits::ChartProvider;
use crate::synth::Synthesizer;

pub struct ChartService {
    providers: Vec<Arc<dyn ChartProvider>>,
    synth: Synthesizer,
    bus: EventBus,
}

impl ChartService {
    pub fn new(providers: Vec<Arc<dyn ChartProvider>>, synth: Synthesizer, bus: EventBus) -> Self {
        Self {
            providers,
            synth,
            bus,
        }
    }

    pub async fn get_chart(&self, symbol: &str, range: &str, interval: &str) -> ChartResponse {
        let request_id = Uuid::new_v4();

        for provider in &self.providers {
            let name = provider.name();
            let started = Instant::now();

            if !provider.available() {
                record_attempt(
                    &self.bus,
                    request_id,
                    DataKind::Chart,
                    name,
                    AttemptOutcome::Skipped,
                    started,
                );
                info!("chart: {} skipped (not configured)", name);
                continue;
            }

            match provider.fetch(symbol, range, interval).await {
                Ok(series) if !series.points.is_empty() => {
                    record_attempt(
                        &self.bus,
                        request_id,
                        DataKind::Chart,
                        name,
                        AttemptOutcome::Success,
                        started,
                    );
                    info!("chart from {} for {}", name, symbol);
                    return ChartResponse {
                        series,
                        provider: name.to_string(),
                    };
                }
                Ok(_) => {
                    record_attempt(
                        &self.bus,
                        request_id,
                        DataKind::Chart,
                        name,
                        AttemptOutcome::Failure("empty series".to_string()),
                        started,
                    );
                    warn!("chart: {} returned an empty series for {}", name, symbol);
                }
                Err(e) => {
                    let detail = truncate_detail(&e.to_string(), ERROR_DETAIL_MAX);
                    record_attempt(
                        &self.bus,
                        request_id,
                        DataKind::Chart,
                        name,
                        AttemptOutcome::Failure(detail.clone()),
                        started,
                    );
                    warn!("chart: {} for {}: {}", name, symbol, detail);
                }
            }
        }

        warn!("using synthetic chart for {}", symbol);
        ChartResponse {
            series: self.synth.chart(symbol, range, interval),
            provider: FALLBACK_PROVIDER.to_string(),
        }
    }
}
