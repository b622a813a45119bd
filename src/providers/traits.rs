use async_trait::async_trait;

use crate::error::ProviderResult;
use crate::models::{AnalysisContext, AnalysisResult, ChartSeries, Quote};

/// One upstream quote source. Adapters are pure functions of
/// (request parameters, process-wide credential); all session state is
/// acquired per call.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Resolved once at construction. Unavailable adapters stay in the chain
    /// and are skipped by the orchestrator.
    fn available(&self) -> bool {
        true
    }

    async fn fetch(&self, symbols: &[String]) -> ProviderResult<Vec<Quote>>;
}

#[async_trait]
pub trait ChartProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn available(&self) -> bool {
        true
    }

    async fn fetch(&self, symbol: &str, range: &str, interval: &str)
        -> ProviderResult<ChartSeries>;
}

/// One analysis source. LLM adapters render the same prompt through their own
/// wire envelope; the terminal local adapter computes the result directly
/// from the context.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn available(&self) -> bool {
        true
    }

    async fn analyze(
        &self,
        prompt: &str,
        context: &AnalysisContext,
    ) -> ProviderResult<AnalysisResult>;
}
