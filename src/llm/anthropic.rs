//! Anthropic messages adapter. Auth via x-api-key header; the completion is
//! a list of content blocks whose text fields are concatenated.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::parse_analysis_text;
use crate::error::{ProviderError, ProviderResult};
use crate::models::{AnalysisContext, AnalysisResult};
use crate::providers::traits::AnalysisProvider;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicAnalysis {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl AnthropicAnalysis {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl AnalysisProvider for AnthropicAnalysis {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn analyze(
        &self,
        prompt: &str,
        _context: &AnalysisContext,
    ) -> ProviderResult<AnalysisResult> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("ANTHROPIC_API_KEY"))?;

        let resp = self
            .client
            .post(API_URL)
            .header("x-api-key", key)
            .header("anthropic-version", API_VERSION)
            .json(&json!({
                "model": self.model,
                "max_tokens": 1000,
                "messages": [{ "role": "user", "content": prompt }],
            }))
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
        let blocks = body
            .get("content")
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::Shape("missing content blocks".to_string()))?;
        let text: String = blocks
            .iter()
            .filter_map(|b| b.get("text").and_then(Value::as_str))
            .collect();

        parse_analysis_text(&text)
    }
}
