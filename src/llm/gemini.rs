//! Gemini generateContent adapter. Key travels as a query parameter and the
//! generated text sits under candidates[0].content.parts[0].text.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use url::Url;

use super::parse_analysis_text;
use crate::error::{ProviderError, ProviderResult};
use crate::models::{AnalysisContext, AnalysisResult};
use crate::providers::traits::AnalysisProvider;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiAnalysis {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiAnalysis {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl AnalysisProvider for GeminiAnalysis {
    fn name(&self) -> &'static str {
        "gemini"
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
            .ok_or(ProviderError::MissingCredential("GEMINI_API_KEY"))?;

        let url = Url::parse_with_params(
            &format!("{}/{}:generateContent", API_BASE, self.model),
            &[("key", key)],
        )?;
        let resp = self
            .client
            .post(url)
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }],
                "generationConfig": {
                    "temperature": 0.7,
                    "maxOutputTokens": 1000,
                    "responseMimeType": "application/json",
                },
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
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ProviderError::Shape("missing candidates[0].content.parts[0].text".to_string())
            })?;

        parse_analysis_text(text)
    }
}
