//! Yahoo cookie/crumb session handshake.
//!
//! The authenticated v7/v8 endpoints require a session cookie and a short
//! lived "crumb" anti-automation token. Acquiring one is a two-call dance:
//! hit fc.yahoo.com (without following its redirect) for the cookie, then
//! exchange the cookie for a crumb at the getcrumb endpoint.

use reqwest::{header, redirect, Client};

use crate::constants::http::USER_AGENT;
use crate::error::{ProviderError, ProviderResult};

const COOKIE_URL: &str = "https://fc.yahoo.com";
const CRUMB_URL: &str = "https://query2.finance.yahoo.com/v1/test/getcrumb";

#[derive(Clone, Debug)]
pub struct YahooSession {
    pub cookie: String,
    pub crumb: String,
}

impl YahooSession {
    /// Runs the full handshake. Acquired fresh per orchestrator attempt; the
    /// crumb is too short-lived to be worth caching across polls.
    pub async fn acquire() -> ProviderResult<Self> {
        // The cookie endpoint answers with a redirect we must not follow.
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;

        let cookie_resp = client.get(COOKIE_URL).send().await?;
        let cookie = cookie_resp
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .unwrap_or_default()
            .to_string();

        let crumb_resp = client
            .get(CRUMB_URL)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await?;
        let status = crumb_resp.status();
        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body: "crumb fetch failed".to_string(),
            });
        }
        let crumb = crumb_resp.text().await?;
        if crumb.is_empty() {
            return Err(ProviderError::Shape("empty crumb".to_string()));
        }

        Ok(Self { cookie, crumb })
    }
}
