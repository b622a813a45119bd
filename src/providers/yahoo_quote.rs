//! Yahoo authenticated v7 quote adapter (cookie/crumb handshake).

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use url::Url;

use super::normalize;
use super::session::YahooSession;
use super::traits::QuoteProvider;
use crate::constants::http::USER_AGENT;
use crate::error::{ProviderError, ProviderResult};
use crate::models::Quote;

const QUOTE_URL: &str = "https://query2.finance.yahoo.com/v7/finance/quote";

#[derive(Clone, Default)]
pub struct YahooCrumbQuotes {
    client: Client,
}

impl YahooCrumbQuotes {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl QuoteProvider for YahooCrumbQuotes {
    fn name(&self) -> &'static str {
        "yahoo-crumb"
    }

    async fn fetch(&self, symbols: &[String]) -> ProviderResult<Vec<Quote>> {
        let session = YahooSession::acquire().await?;

        let url = Url::parse_with_params(
            QUOTE_URL,
            &[
                ("symbols", symbols.join(",")),
                ("crumb", session.crumb.clone()),
            ],
        )?;
        let resp = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &session.cookie)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let body: Value = resp.json().await?;
        let result = body
            .get("quoteResponse")
            .and_then(|q| q.get("result"))
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::Shape("missing quoteResponse.result".to_string()))?;

        let records: Vec<Quote> = result.iter().filter_map(normalize::quote_from_yahoo_v7).collect();
        if records.is_empty() {
            return Err(ProviderError::Shape("no quote results".to_string()));
        }
        Ok(records)
    }
}
