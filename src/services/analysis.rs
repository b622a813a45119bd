//! Analysis fallback orchestrator.
//!
//! Runs the LLM adapters in order, ending with the rule-based local path.
//! Unlike quotes and charts there is no synthetic terminal fallback: if the
//! entire chain somehow fails, the caller receives a structured error object
//! to render instead of fabricated financial advice.

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use super::record_attempt;
use crate::bus::EventBus;
use crate::constants::http::ERROR_DETAIL_MAX;
use crate::error::truncate_detail;
use crate::events::{AttemptOutcome, DataKind};
use crate::llm::prompt::build_prompt;
use crate::models::{AnalysisContext, AnalysisFailure, AnalysisResult};
use crate::providers::traits::AnalysisProvider;

/// A successful analysis plus its provenance.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub provider: String,
}

pub struct AnalysisService {
    providers: Vec<Arc<dyn AnalysisProvider>>,
    bus: EventBus,
}

impl AnalysisService {
    pub fn new(providers: Vec<Arc<dyn AnalysisProvider>>, bus: EventBus) -> Self {
        Self { providers, bus }
    }

    /// Not cached: a repeated request re-runs the full chain. The prompt is
    /// rendered once and handed to every adapter unchanged.
    pub async fn analyze(
        &self,
        context: &AnalysisContext,
    ) -> Result<AnalysisReport, AnalysisFailure> {
        let request_id = Uuid::new_v4();
        let prompt = build_prompt(context);
        let mut last_detail = String::new();

        for provider in &self.providers {
            let name = provider.name();
            let started = Instant::now();

            if !provider.available() {
                record_attempt(
                    &self.bus,
                    request_id,
                    DataKind::Analysis,
                    name,
                    AttemptOutcome::Skipped,
                    started,
                );
                info!("analysis: {} skipped (not configured)", name);
                continue;
            }

            match provider.analyze(&prompt, context).await {
                Ok(result) => {
                    record_attempt(
                        &self.bus,
                        request_id,
                        DataKind::Analysis,
                        name,
                        AttemptOutcome::Success,
                        started,
                    );
                    info!("analysis from {}: {:?}", name, result.signal);
                    return Ok(AnalysisReport {
                        result,
                        provider: name.to_string(),
                    });
                }
                Err(e) => {
                    let detail = truncate_detail(&e.to_string(), ERROR_DETAIL_MAX);
                    record_attempt(
                        &self.bus,
                        request_id,
                        DataKind::Analysis,
                        name,
                        AttemptOutcome::Failure(detail.clone()),
                        started,
                    );
                    warn!("analysis: {}: {}", name, detail);
                    last_detail = detail;
                }
            }
        }

        Err(AnalysisFailure {
            error: "All AI providers failed".to_string(),
            detail: last_detail,
        })
    }
}
