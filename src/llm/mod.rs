//! LLM analysis adapters.
//!
//! Four upstream chat APIs plus the terminal rule-based local path. Every
//! adapter receives the same rendered prompt and must deliver the same
//! strict-JSON analysis shape; the shared decode here strips Markdown code
//! fences first, since models wrap structured output in fence markers despite
//! instructions not to.

pub mod anthropic;
pub mod gemini;
pub mod groq;
pub mod local;
pub mod openai;
pub mod prompt;

#[cfg(test)]
mod local_tests;
#[cfg(test)]
mod parse_tests;

use crate::error::{ProviderError, ProviderResult};
use crate::models::AnalysisResult;

/// Remove ```json / ``` fence markers anywhere in the text.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Decode a model's raw text into the canonical analysis shape. A payload
/// without a recognized `signal` fails the typed decode and is treated like
/// any other provider failure.
pub fn parse_analysis_text(text: &str) -> ProviderResult<AnalysisResult> {
    let clean = strip_code_fences(text);
    if clean.is_empty() {
        return Err(ProviderError::Shape("empty completion".to_string()));
    }
    Ok(serde_json::from_str(&clean)?)
}
