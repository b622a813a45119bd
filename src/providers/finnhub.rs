//! Finnhub quote adapter. API-key gated: constructed without a key it stays
//! in the chain but reports unavailable, which the orchestrator treats the
//! same as a network failure.

use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::normalize;
use super::traits::QuoteProvider;
use crate::error::{ProviderError, ProviderResult};
use crate::models::Quote;
use crate::synth::is_crypto;

const QUOTE_URL: &str = "https://finnhub.io/api/v1/quote";

#[derive(Clone)]
pub struct FinnhubQuotes {
    client: Client,
    api_key: Option<String>,
}

impl FinnhubQuotes {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Finnhub lists crypto under exchange-prefixed pairs.
    fn finnhub_symbol(symbol: &str) -> String {
        if is_crypto(symbol) {
            format!("BINANCE:{}USDT", symbol.trim_end_matches("-USD"))
        } else {
            symbol.to_string()
        }
    }

    async fn fetch_one(&self, symbol: &str, token: &str) -> Option<Quote> {
        let url = Url::parse_with_params(
            QUOTE_URL,
            &[
                ("symbol", Self::finnhub_symbol(symbol).as_str()),
                ("token", token),
            ],
        )
        .ok()?;
        let resp = self.client.get(url).send().await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let body: Value = resp.json().await.ok()?;
        normalize::quote_from_finnhub(symbol, &body)
    }
}

#[async_trait]
impl QuoteProvider for FinnhubQuotes {
    fn name(&self) -> &'static str {
        "finnhub"
    }

    fn available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch(&self, symbols: &[String]) -> ProviderResult<Vec<Quote>> {
        let token = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("FINNHUB_API_KEY"))?;

        let lookups = symbols.iter().map(|s| self.fetch_one(s, token));
        let records: Vec<Quote> = join_all(lookups).await.into_iter().flatten().collect();
        if records.is_empty() {
            return Err(ProviderError::Shape("no finnhub results".to_string()));
        }
        Ok(records)
    }
}
