//! OpenAI chat-completions adapter.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::{json, Value};

use super::parse_analysis_text;
use crate::error::{ProviderError, ProviderResult};
use crate::models::{AnalysisContext, AnalysisResult};
use crate::providers::traits::AnalysisProvider;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub struct OpenAiAnalysis {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl OpenAiAnalysis {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl AnalysisProvider for OpenAiAnalysis {
    fn name(&self) -> &'static str {
        "openai"
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
            .ok_or(ProviderError::MissingCredential("OPENAI_API_KEY"))?;

        let resp = self
            .client
            .post(API_URL)
            .header(header::AUTHORIZATION, format!("Bearer {}", key))
            .json(&json!({
                "model": self.model,
                "messages": [{ "role": "user", "content": prompt }],
                "temperature": 0.7,
                "max_tokens": 1000,
                "response_format": { "type": "json_object" },
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
        let text = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
            .ok_or_else(|| ProviderError::Shape("missing choices[0].message.content".to_string()))?;

        parse_analysis_text(text)
    }
}
