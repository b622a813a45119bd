//! Chain construction. Each data kind gets a fixed ordered list of adapters
//! built once at process start; credential-gated adapters resolve their
//! availability here rather than branching at call time.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::{
    anthropic::AnthropicAnalysis, gemini::GeminiAnalysis, groq::GroqAnalysis,
    local::LocalAnalysis, openai::OpenAiAnalysis,
};

use super::finnhub::FinnhubQuotes;
use super::traits::{AnalysisProvider, ChartProvider, QuoteProvider};
use super::yahoo_chart::{YahooChart, YahooChartCrumb};
use super::yahoo_quote::YahooCrumbQuotes;
use super::yahoo_scrape::YahooScrapeQuotes;

pub fn build_quote_chain(config: &AppConfig) -> Vec<Arc<dyn QuoteProvider>> {
    vec![
        Arc::new(YahooCrumbQuotes::new()),
        Arc::new(YahooScrapeQuotes::new()),
        Arc::new(FinnhubQuotes::new(config.credentials.finnhub_api_key.clone())),
    ]
}

pub fn build_chart_chain(_config: &AppConfig) -> Vec<Arc<dyn ChartProvider>> {
    vec![Arc::new(YahooChart::new()), Arc::new(YahooChartCrumb::new())]
}

/// The analysis chain ends with the rule-based local path, which is always
/// available and cannot fail; LLM adapters without credentials are skipped.
pub fn build_analysis_chain(config: &AppConfig) -> Vec<Arc<dyn AnalysisProvider>> {
    let creds = &config.credentials;
    let models = &config.models;
    vec![
        Arc::new(GroqAnalysis::new(
            creds.groq_api_key.clone(),
            models.groq.clone(),
        )),
        Arc::new(GeminiAnalysis::new(
            creds.gemini_api_key.clone(),
            models.gemini.clone(),
        )),
        Arc::new(AnthropicAnalysis::new(
            creds.anthropic_api_key.clone(),
            models.anthropic.clone(),
        )),
        Arc::new(OpenAiAnalysis::new(
            creds.openai_api_key.clone(),
            models.openai.clone(),
        )),
        Arc::new(LocalAnalysis),
    ]
}
