//! Yahoo v8 chart adapters: the plain public endpoint and the cookie/crumb
//! variant used when the public one is being rate limited.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use url::Url;

use super::normalize;
use super::session::YahooSession;
use super::traits::ChartProvider;
use crate::constants::http::USER_AGENT;
use crate::error::{ProviderError, ProviderResult};
use crate::models::ChartSeries;

const CHART_URL_V8: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const CHART_URL_CRUMB: &str = "https://query2.finance.yahoo.com/v8/finance/chart";

fn decode_series(
    symbol: &str,
    range: &str,
    interval: &str,
    body: &Value,
) -> ProviderResult<ChartSeries> {
    normalize::series_from_yahoo_chart(symbol, range, interval, body)
        .filter(|series| !series.points.is_empty())
        .ok_or_else(|| ProviderError::Shape("no chart data".to_string()))
}

#[derive(Clone, Default)]
pub struct YahooChart {
    client: Client,
}

impl YahooChart {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ChartProvider for YahooChart {
    fn name(&self) -> &'static str {
        "yahoo-v8"
    }

    async fn fetch(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> ProviderResult<ChartSeries> {
        let url = Url::parse_with_params(
            &format!("{}/{}", CHART_URL_V8, symbol),
            &[
                ("range", range),
                ("interval", interval),
                ("includePrePost", "false"),
            ],
        )?;
        let resp = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/json")
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
        decode_series(symbol, range, interval, &body)
    }
}

#[derive(Clone, Default)]
pub struct YahooChartCrumb {
    client: Client,
}

impl YahooChartCrumb {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ChartProvider for YahooChartCrumb {
    fn name(&self) -> &'static str {
        "yahoo-crumb"
    }

    async fn fetch(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> ProviderResult<ChartSeries> {
        let session = YahooSession::acquire().await?;

        let url = Url::parse_with_params(
            &format!("{}/{}", CHART_URL_CRUMB, symbol),
            &[
                ("range", range),
                ("interval", interval),
                ("crumb", session.crumb.as_str()),
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
        decode_series(symbol, range, interval, &body)
    }
}
