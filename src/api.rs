use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::constants::ranges;
use crate::models::AnalysisContext;
use crate::services::{analysis::AnalysisService, charts::ChartService, quotes::QuoteService};

pub struct AppState {
    pub quotes: QuoteService,
    pub charts: ChartService,
    pub analysis: AnalysisService,
    pub config: AppConfig,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/quote", get(get_quote))
        .route("/api/chart", get(get_chart))
        .route("/api/analyze", post(post_analyze))
        .route("/api/meta", get(get_meta))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) {
    let bind_addr = state.config.bind_addr.clone();
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    info!("API server listening on {}", bind_addr);
    axum::serve(listener, app).await.unwrap();
}

#[derive(Deserialize)]
struct QuoteParams {
    symbols: Option<String>,
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuoteParams>,
) -> impl IntoResponse {
    let symbols: Vec<String> = params
        .symbols
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if symbols.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing symbols" })),
        )
            .into_response();
    }

    let batch = state.quotes.get_quotes(&symbols).await;
    Json(json!({
        "quoteResponse": { "result": batch.records },
        "_provider": batch.provider,
    }))
    .into_response()
}

#[derive(Deserialize)]
struct ChartParams {
    symbol: Option<String>,
    range: Option<String>,
    interval: Option<String>,
}

async fn get_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> impl IntoResponse {
    let Some(symbol) = params.symbol.filter(|s| !s.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing symbol" })),
        )
            .into_response();
    };
    let range = params
        .range
        .unwrap_or_else(|| ranges::DEFAULT_RANGE.to_string());
    let interval = params
        .interval
        .unwrap_or_else(|| ranges::DEFAULT_INTERVAL.to_string());

    let chart = state.charts.get_chart(symbol.trim(), &range, &interval).await;
    Json(json!({
        "symbol": chart.series.symbol,
        "range": chart.series.range,
        "interval": chart.series.interval,
        "points": chart.series.points,
        "_provider": chart.provider,
    }))
    .into_response()
}

async fn post_analyze(
    State(state): State<Arc<AppState>>,
    Json(context): Json<AnalysisContext>,
) -> impl IntoResponse {
    match state.analysis.analyze(&context).await {
        Ok(report) => {
            let mut body = match serde_json::to_value(&report.result) {
                Ok(v) => v,
                Err(e) => {
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "serialization failed", "detail": e.to_string() })),
                    )
                        .into_response()
                }
            };
            body["_provider"] = json!(report.provider);
            Json(body).into_response()
        }
        Err(failure) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": failure.error, "detail": failure.detail })),
        )
            .into_response(),
    }
}

/// Session bootstrap data for the UI: the supported range/interval table,
/// the default watchlist, and the suggested poll interval.
async fn get_meta(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let range_table: Vec<_> = ranges::SUPPORTED
        .iter()
        .map(|(value, interval, label)| {
            json!({ "value": value, "interval": interval, "label": label })
        })
        .collect();
    Json(json!({
        "ranges": range_table,
        "watchlist": state.config.watchlist,
        "pollIntervalSecs": state.config.poll_interval_secs,
    }))
}
