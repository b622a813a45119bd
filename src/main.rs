use std::sync::Arc;
use tracing::{debug, info, warn};

use ticker_terminal::api::{run_server, AppState};
use ticker_terminal::bus::EventBus;
use ticker_terminal::config::AppConfig;
use ticker_terminal::events::{AttemptOutcome, Event};
use ticker_terminal::providers::factory::{
    build_analysis_chain, build_chart_chain, build_quote_chain,
};
use ticker_terminal::services::{
    analysis::AnalysisService, charts::ChartService, quotes::QuoteService,
};
use ticker_terminal::synth::Synthesizer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting Ticker Terminal...");

    let config = AppConfig::load();
    info!(
        "Loaded configuration: bind={} watchlist={:?}",
        config.bind_addr, config.watchlist
    );

    let bus = EventBus::new(1000);
    spawn_attempt_logger(bus.clone());

    let synth = Synthesizer::default();
    let state = Arc::new(AppState {
        quotes: QuoteService::new(build_quote_chain(&config), synth.clone(), bus.clone()),
        charts: ChartService::new(build_chart_chain(&config), synth, bus.clone()),
        analysis: AnalysisService::new(build_analysis_chain(&config), bus),
        config,
    });

    run_server(state).await;

    Ok(())
}

/// Default observability sink: turns attempt events into structured log
/// lines. Any other sink can subscribe to the same bus.
fn spawn_attempt_logger(bus: EventBus) {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            let Event::Attempt(attempt) = event;
            match &attempt.outcome {
                AttemptOutcome::Success => debug!(
                    request_id = %attempt.request_id,
                    kind = attempt.kind.as_str(),
                    provider = attempt.provider,
                    latency_ms = attempt.latency_ms,
                    "provider attempt succeeded"
                ),
                AttemptOutcome::Failure(detail) => warn!(
                    request_id = %attempt.request_id,
                    kind = attempt.kind.as_str(),
                    provider = attempt.provider,
                    latency_ms = attempt.latency_ms,
                    detail = detail.as_str(),
                    "provider attempt failed"
                ),
                AttemptOutcome::Skipped => debug!(
                    request_id = %attempt.request_id,
                    kind = attempt.kind.as_str(),
                    provider = attempt.provider,
                    "provider skipped"
                ),
            }
        }
    });
}
