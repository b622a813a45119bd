//! Unit tests for the shared completion decode.

#[cfg(test)]
mod parse_tests {
    use crate::llm::{parse_analysis_text, strip_code_fences};
    use crate::models::Signal;

    const VALID: &str = r#"{
        "signal": "BULLISH",
        "confidence": 72,
        "summary": "Strong uptrend with elevated momentum.",
        "technicals": [
            {"label": "Above 50 SMA", "type": "bull", "detail": "Price above 210.00"}
        ],
        "keyLevels": {"support": 210.0, "resistance": 245.0},
        "shortTermOutlook": "Watch the 50-day level.",
        "risks": ["Momentum may fade"],
        "beginnerNotes": "Looks healthy but do your own research."
    }"#;

    #[test]
    fn test_plain_json_decodes() {
        let result = parse_analysis_text(VALID).unwrap();
        assert_eq!(result.signal, Signal::Bullish);
        assert_eq!(result.confidence, 72);
        assert_eq!(result.technicals.len(), 1);
        assert_eq!(result.key_levels.as_ref().unwrap().support, 210.0);
    }

    #[test]
    fn test_fenced_json_decodes_identically() {
        let fenced = format!("```json\n{}\n```", VALID);
        let from_fenced = parse_analysis_text(&fenced).unwrap();
        let from_plain = parse_analysis_text(VALID).unwrap();
        assert_eq!(from_fenced.signal, from_plain.signal);
        assert_eq!(from_fenced.confidence, from_plain.confidence);
        assert_eq!(from_fenced.summary, from_plain.summary);
    }

    #[test]
    fn test_bare_fence_markers_stripped() {
        let fenced = format!("```\n{}\n```", VALID);
        assert!(parse_analysis_text(&fenced).is_ok());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let minimal = r#"{"signal": "NEUTRAL", "confidence": 50, "summary": "Flat."}"#;
        let result = parse_analysis_text(minimal).unwrap();
        assert_eq!(result.signal, Signal::Neutral);
        assert!(result.technicals.is_empty());
        assert!(result.key_levels.is_none());
        assert!(result.risks.is_empty());
    }

    #[test]
    fn test_unrecognized_signal_rejected() {
        let bad = r#"{"signal": "SIDEWAYS", "confidence": 50, "summary": "?"}"#;
        assert!(parse_analysis_text(bad).is_err());
    }

    #[test]
    fn test_missing_signal_rejected() {
        let bad = r#"{"confidence": 50, "summary": "no signal field"}"#;
        assert!(parse_analysis_text(bad).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_analysis_text("I'm sorry, I can't produce JSON.").is_err());
    }

    #[test]
    fn test_empty_completion_rejected() {
        assert!(parse_analysis_text("").is_err());
        assert!(parse_analysis_text("```json\n```").is_err());
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("no fences here"), "no fences here");
    }
}
