//! Quote fallback orchestrator.
//!
//! Tries each registered quote adapter in fixed priority order, sequentially,
//! short-circuiting on the first non-empty record list. When every live
//! provider fails, the synthesizer answers instead; callers never observe a
//! quote error, only provenance.

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use super::record_attempt;
use crate::bus::EventBus;
use crate::constants::http::ERROR_DETAIL_MAX;
use crate::error::truncate_detail;
use crate::events::{AttemptOutcome, DataKind};
use crate::models::QuoteBatch;
use crate::providers::traits::QuoteProvider;
use crate::synth::Synthesizer;

pub const FALLBACK_PROVIDER: &str = "fallback";

pub struct QuoteService {
    providers: Vec<Arc<dyn QuoteProvider>>,
    synth: Synthesizer,
    bus: EventBus,
}

impl QuoteService {
    pub fn new(providers: Vec<Arc<dyn QuoteProvider>>, synth: Synthesizer, bus: EventBus) -> Self {
        Self {
            providers,
            synth,
            bus,
        }
    }

    /// Infallible by contract: always returns a batch, tagged with the
    /// provider that produced it or `"fallback"`.
    pub async fn get_quotes(&self, symbols: &[String]) -> QuoteBatch {
        let request_id = Uuid::new_v4();

        for provider in &self.providers {
            let name = provider.name();
            let started = Instant::now();

            if !provider.available() {
                record_attempt(
                    &self.bus,
                    request_id,
                    DataKind::Quote,
                    name,
                    AttemptOutcome::Skipped,
                    started,
                );
                info!("quotes: {} skipped (not configured)", name);
                continue;
            }

            match provider.fetch(symbols).await {
                Ok(records) if !records.is_empty() => {
                    record_attempt(
                        &self.bus,
                        request_id,
                        DataKind::Quote,
                        name,
                        AttemptOutcome::Success,
                        started,
                    );
                    info!("quotes from {} ({} symbols)", name, records.len());
                    return QuoteBatch {
                        records,
                        provider: name.to_string(),
                    };
                }
                Ok(_) => {
                    record_attempt(
                        &self.bus,
                        request_id,
                        DataKind::Quote,
                        name,
                        AttemptOutcome::Failure("empty result".to_string()),
                        started,
                    );
                    warn!("quotes: {} returned no records", name);
                }
                Err(e) => {
                    let detail = truncate_detail(&e.to_string(), ERROR_DETAIL_MAX);
                    record_attempt(
                        &self.bus,
                        request_id,
                        DataKind::Quote,
                        name,
                        AttemptOutcome::Failure(detail.clone()),
                        started,
                    );
                    warn!("quotes: {}: {}", name, detail);
                }
            }
        }

        warn!("all live quote providers failed, synthesizing");
        QuoteBatch {
            records: self.synth.quotes(symbols),
            provider: FALLBACK_PROVIDER.to_string(),
        }
    }
}
