//! Unit tests for the fallback synthesizer.

#[cfg(test)]
mod synth_tests {
    use crate::synth::{is_crypto, ReferenceData, Synthesizer};

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // ============= Quote Synthesis Tests =============

    #[test]
    fn test_one_record_per_symbol() {
        let synth = Synthesizer::default();
        let request = symbols(&["AAPL", "BTC-USD", "ZZZZ"]);
        let records = synth.quotes(&request);
        assert_eq!(records.len(), 3);
        for (record, requested) in records.iter().zip(&request) {
            assert_eq!(&record.symbol, requested);
        }
    }

    #[test]
    fn test_all_numeric_fields_finite() {
        let synth = Synthesizer::default();
        for record in synth.quotes(&symbols(&["AAPL", "DOGE-USD", "UNKNOWN1"])) {
            assert!(record.regular_market_price.is_finite());
            assert!(record.regular_market_change.is_finite());
            assert!(record.regular_market_previous_close.is_finite());
            for opt in [
                record.regular_market_change_percent,
                record.regular_market_open,
                record.regular_market_day_high,
                record.regular_market_day_low,
                record.fifty_two_week_high,
                record.fifty_two_week_low,
                record.trailing_pe,
                record.forward_pe,
                record.trailing_eps,
                record.beta,
                record.fifty_day_average,
                record.two_hundred_day_average,
            ] {
                assert!(opt.map_or(true, f64::is_finite));
            }
        }
    }

    #[test]
    fn test_price_non_negative() {
        let synth = Synthesizer::default();
        for record in synth.quotes(&symbols(&["AAPL", "SNAP", "DOGE-USD"])) {
            assert!(record.regular_market_price >= 0.0);
        }
    }

    #[test]
    fn test_percent_change_identity() {
        let synth = Synthesizer::default();
        for record in synth.quotes(&symbols(&["AAPL", "MSFT", "ETH-USD"])) {
            let prev = record.regular_market_previous_close;
            assert!(prev != 0.0);
            let expected = 100.0 * record.regular_market_change / prev;
            let actual = record.regular_market_change_percent.unwrap();
            assert!(
                (actual - expected).abs() < 1e-9,
                "pct {} vs computed {}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_unknown_symbol_base_is_stable() {
        let reference = ReferenceData::default();
        let a = reference.base_price("QQXJ");
        let b = reference.base_price("QQXJ");
        assert_eq!(a, b);
        assert!(a >= 50.0 && a < 450.0);
    }

    // ============= Chart Synthesis Tests =============

    #[test]
    fn test_point_count_fixed_per_range() {
        let synth = Synthesizer::default();
        assert_eq!(synth.chart("AAPL", "1d", "5m").points.len(), 78);
        assert_eq!(synth.chart("AAPL", "1mo", "30m").points.len(), 22);
        assert_eq!(synth.chart("BTC-USD", "1mo", "30m").points.len(), 22);
        assert_eq!(synth.chart("ZZZZ", "6mo", "1d").points.len(), 126);
        // Unrecognized ranges use the 3mo default
        assert_eq!(synth.chart("AAPL", "2w", "1d").points.len(), 63);
    }

    #[test]
    fn test_timestamps_strictly_ascending() {
        let synth = Synthesizer::default();
        let series = synth.chart("TSLA", "1y", "1wk");
        for pair in series.points.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn test_final_close_settles_on_base_price() {
        let synth = Synthesizer::default();
        let series = synth.chart("AAPL", "3mo", "1d");
        assert_eq!(series.points.last().unwrap().close, 228.0);
    }

    #[test]
    fn test_closes_positive_throughout_walk() {
        let synth = Synthesizer::default();
        for _ in 0..10 {
            let series = synth.chart("DOGE-USD", "6mo", "1d");
            for point in &series.points {
                assert!(point.close > 0.0);
            }
        }
    }

    #[test]
    fn test_is_crypto_suffix() {
        assert!(is_crypto("BTC-USD"));
        assert!(is_crypto("SOL-USD"));
        assert!(!is_crypto("AAPL"));
        assert!(!is_crypto("USD"));
    }
}
