//! Session-free quote alternative: scrape the meta block of the lightweight
//! v8 chart endpoint, one request per symbol.
//!
//! Lookups are independent and same-provider, so they run concurrently,
//! bounded to the first 10 symbols of the batch. A symbol whose lookup fails
//! is simply absent from the result; the batch fails only when every symbol
//! came back empty.

use async_trait::async_trait;
use futures_util::{stream, StreamExt};
use reqwest::{header, Client};
use serde_json::Value;
use url::Url;

use super::normalize;
use super::traits::QuoteProvider;
use crate::constants::http::USER_AGENT;
use crate::constants::scrape::MAX_CONCURRENT_SYMBOLS;
use crate::error::{ProviderError, ProviderResult};
use crate::models::Quote;

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

#[derive(Clone, Default)]
pub struct YahooScrapeQuotes {
    client: Client,
}

impl YahooScrapeQuotes {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn fetch_one(&self, symbol: &str) -> Option<Quote> {
        let url = Url::parse_with_params(
            &format!("{}/{}", CHART_URL, symbol),
            &[("range", "1d"), ("interval", "1d")],
        )
        .ok()?;
        let resp = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let body: Value = resp.json().await.ok()?;
        normalize::quote_from_chart_meta(symbol, &body)
    }
}

#[async_trait]
impl QuoteProvider for YahooScrapeQuotes {
    fn name(&self) -> &'static str {
        "yahoo-chart-meta"
    }

    async fn fetch(&self, symbols: &[String]) -> ProviderResult<Vec<Quote>> {
        let lookups: Vec<_> = symbols
            .iter()
            .take(MAX_CONCURRENT_SYMBOLS)
            .map(|symbol| self.fetch_one(symbol))
            .collect();
        let results: Vec<Option<Quote>> = stream::iter(lookups)
            .buffered(MAX_CONCURRENT_SYMBOLS)
            .collect()
            .await;

        let records: Vec<Quote> = results.into_iter().flatten().collect();
        if records.is_empty() {
            return Err(ProviderError::Shape("no valid scrape results".to_string()));
        }
        Ok(records)
    }
}
