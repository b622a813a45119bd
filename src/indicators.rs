//! Technical indicator math over close-price sequences.
//!
//! These are inputs to the analysis context, not part of the fallback core.
//! Each function returns one value per input point, `None`-padded until the
//! indicator has enough history.

/// Simple moving average.
pub fn sma(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; closes.len()];
    }
    closes
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < period {
                None
            } else {
                let window = &closes[i + 1 - period..=i];
                Some(window.iter().sum::<f64>() / period as f64)
            }
        })
        .collect()
}

/// Relative strength index with Wilder smoothing.
pub fn rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return out;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let diff = closes[i] - closes[i - 1];
        if diff > 0.0 {
            gains += diff;
        } else {
            losses -= diff;
        }
    }
    let mut avg_gain = gains / period as f64;
    let mut avg_loss = losses / period as f64;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    for i in period + 1..closes.len() {
        let diff = closes[i] - closes[i - 1];
        let gain = if diff > 0.0 { diff } else { 0.0 };
        let loss = if diff < 0.0 { -diff } else { 0.0 };
        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BollingerBand {
    pub upper: f64,
    pub mid: f64,
    pub lower: f64,
}

/// Bollinger bands: 2 standard deviations around the period mean.
pub fn bollinger(closes: &[f64], period: usize) -> Vec<Option<BollingerBand>> {
    if period == 0 {
        return vec![None; closes.len()];
    }
    closes
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < period {
                None
            } else {
                let window = &closes[i + 1 - period..=i];
                let mean = window.iter().sum::<f64>() / period as f64;
                let variance =
                    window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
                let std = variance.sqrt();
                Some(BollingerBand {
                    upper: mean + 2.0 * std,
                    mid: mean,
                    lower: mean - 2.0 * std,
                })
            }
        })
        .collect()
}
