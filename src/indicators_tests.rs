//! Unit tests for the indicator math.

#[cfg(test)]
mod indicators_tests {
    use crate::indicators::{bollinger, rsi, sma};

    // ============= SMA Tests =============

    #[test]
    fn test_sma_basic() {
        let closes = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&closes, 3);
        assert_eq!(result.len(), 5);
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        assert_eq!(result[2], Some(2.0));
        assert_eq!(result[3], Some(3.0));
        assert_eq!(result[4], Some(4.0));
    }

    #[test]
    fn test_sma_period_longer_than_data() {
        let closes = vec![1.0, 2.0];
        assert!(sma(&closes, 5).iter().all(Option::is_none));
    }

    #[test]
    fn test_sma_zero_period() {
        let closes = vec![1.0, 2.0];
        assert!(sma(&closes, 0).iter().all(Option::is_none));
    }

    // ============= RSI Tests =============

    #[test]
    fn test_rsi_warmup_padding() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let result = rsi(&closes, 14);
        assert_eq!(result.len(), 20);
        assert!(result[..14].iter().all(Option::is_none));
        assert!(result[14].is_some());
    }

    #[test]
    fn test_rsi_all_gains_is_100() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let result = rsi(&closes, 14);
        assert_eq!(result[19], Some(100.0));
    }

    #[test]
    fn test_rsi_all_losses_near_zero() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        let result = rsi(&closes, 14);
        let last = result[19].unwrap();
        assert!(last < 1.0, "expected RSI near 0, got {}", last);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let closes = vec![1.0, 2.0, 3.0];
        assert!(rsi(&closes, 14).iter().all(Option::is_none));
    }

    #[test]
    fn test_rsi_bounded() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ];
        for v in rsi(&closes, 14).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&v));
        }
    }

    // ============= Bollinger Tests =============

    #[test]
    fn test_bollinger_constant_series_collapses() {
        let closes = vec![50.0; 25];
        let bands = bollinger(&closes, 20);
        let band = bands[24].unwrap();
        assert_eq!(band.upper, 50.0);
        assert_eq!(band.mid, 50.0);
        assert_eq!(band.lower, 50.0);
    }

    #[test]
    fn test_bollinger_symmetric_around_mean() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i % 5) as f64).collect();
        let bands = bollinger(&closes, 20);
        let band = bands[29].unwrap();
        assert!(band.upper > band.mid);
        assert!(band.lower < band.mid);
        let upper_gap = band.upper - band.mid;
        let lower_gap = band.mid - band.lower;
        assert!((upper_gap - lower_gap).abs() < 1e-9);
    }

    #[test]
    fn test_bollinger_warmup_padding() {
        let closes = vec![10.0; 19];
        assert!(bollinger(&closes, 20).iter().all(Option::is_none));
    }
}
