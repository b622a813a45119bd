//! Integration tests for the data-acquisition layer.
//! These tests exercise the fallback orchestrators end to end with no
//! network: empty or scripted chains plus the always-on terminal paths.

use std::sync::Arc;

use async_trait::async_trait;

use ticker_terminal::bus::EventBus;
use ticker_terminal::error::{ProviderError, ProviderResult};
use ticker_terminal::events::{AttemptOutcome, DataKind, Event};
use ticker_terminal::llm::local::LocalAnalysis;
use ticker_terminal::models::{AnalysisContext, AnalysisResult, ChartSeries, Signal};
use ticker_terminal::providers::traits::{AnalysisProvider, ChartProvider};
use ticker_terminal::services::analysis::AnalysisService;
use ticker_terminal::services::charts::ChartService;
use ticker_terminal::services::quotes::{QuoteService, FALLBACK_PROVIDER};
use ticker_terminal::synth::Synthesizer;

fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// With no providers registered, quotes still answer via the synthesizer.
#[tokio::test]
async fn test_empty_quote_chain_synthesizes_end_to_end() {
    let service = QuoteService::new(Vec::new(), Synthesizer::default(), EventBus::new(16));

    let request = symbols(&["AAPL", "BTC-USD"]);
    let batch = service.get_quotes(&request).await;

    assert_eq!(batch.provider, FALLBACK_PROVIDER);
    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.records[0].symbol, "AAPL");
    assert_eq!(batch.records[1].symbol, "BTC-USD");
    for record in &batch.records {
        assert!(record.regular_market_price > 0.0);
        assert!(record.regular_market_change_percent.is_some());
    }
}

/// With no providers registered, charts still answer via the synthesizer,
/// with the range's fixed point count and ascending timestamps.
#[tokio::test]
async fn test_empty_chart_chain_synthesizes_end_to_end() {
    let service = ChartService::new(Vec::new(), Synthesizer::default(), EventBus::new(16));

    let response = service.get_chart("ETH-USD", "1d", "5m").await;

    assert_eq!(response.provider, FALLBACK_PROVIDER);
    assert_eq!(response.series.symbol, "ETH-USD");
    assert_eq!(response.series.range, "1d");
    assert_eq!(response.series.points.len(), 78);
    for pair in response.series.points.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
    }
}

/// A chain holding only the rule-based local provider always succeeds, and
/// the report carries its provenance.
#[tokio::test]
async fn test_local_analysis_terminal_path() {
    let service = AnalysisService::new(vec![Arc::new(LocalAnalysis)], EventBus::new(16));

    let ctx = AnalysisContext {
        symbol: "AAPL".to_string(),
        price: Some(228.0),
        change: Some(3.2),
        high52: Some(260.0),
        low52: Some(164.0),
        sma50: Some(210.0),
        sma200: Some(200.0),
        rsi: Some(75.0),
        ..Default::default()
    };
    let report = service.analyze(&ctx).await.unwrap();

    assert_eq!(report.provider, "local-analysis");
    assert_eq!(report.result.signal, Signal::Bullish);
    assert_eq!(report.result.confidence, 70);
    assert!(report.result.summary.contains("AAPL"));
    assert!(report.result.key_levels.is_some());
}

struct AlwaysFails;

#[async_trait]
impl AnalysisProvider for AlwaysFails {
    fn name(&self) -> &'static str {
        "always-fails"
    }

    async fn analyze(
        &self,
        _prompt: &str,
        _context: &AnalysisContext,
    ) -> ProviderResult<AnalysisResult> {
        Err(ProviderError::Http {
            status: 503,
            body: "upstream down".to_string(),
        })
    }
}

/// A failing LLM adapter falls through to the local path, and both attempts
/// are observable on the event bus under one correlation id.
#[tokio::test]
async fn test_failing_llm_falls_through_with_events() {
    let bus = EventBus::new(16);
    let mut rx = bus.subscribe();
    let service = AnalysisService::new(vec![Arc::new(AlwaysFails), Arc::new(LocalAnalysis)], bus);

    let ctx = AnalysisContext {
        symbol: "TSLA".to_string(),
        price: Some(250.0),
        ..Default::default()
    };
    let report = service.analyze(&ctx).await.unwrap();
    assert_eq!(report.provider, "local-analysis");

    let first = match rx.try_recv().unwrap() {
        Event::Attempt(attempt) => attempt,
    };
    let second = match rx.try_recv().unwrap() {
        Event::Attempt(attempt) => attempt,
    };
    assert_eq!(first.kind, DataKind::Analysis);
    assert_eq!(first.provider, "always-fails");
    assert!(matches!(first.outcome, AttemptOutcome::Failure(_)));
    assert_eq!(second.provider, "local-analysis");
    assert_eq!(second.outcome, AttemptOutcome::Success);
    assert_eq!(first.request_id, second.request_id);
}

struct AlwaysFailsChart;

#[async_trait]
impl ChartProvider for AlwaysFailsChart {
    fn name(&self) -> &'static str {
        "always-fails"
    }

    async fn fetch(
        &self,
        _symbol: &str,
        _range: &str,
        _interval: &str,
    ) -> ProviderResult<ChartSeries> {
        Err(ProviderError::Shape("no chart data".to_string()))
    }
}

/// Failing chart providers end in a synthetic series whose last close
/// settles on the symbol's reference price.
#[tokio::test]
async fn test_chart_fallback_settles_on_reference_price() {
    let service = ChartService::new(
        vec![Arc::new(AlwaysFailsChart)],
        Synthesizer::default(),
        EventBus::new(16),
    );

    let response = service.get_chart("AAPL", "3mo", "1d").await;
    assert_eq!(response.provider, FALLBACK_PROVIDER);
    assert_eq!(response.series.points.last().unwrap().close, 228.0);
}
