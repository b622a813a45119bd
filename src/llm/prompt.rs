//! Deterministic prompt rendering.
//!
//! The rendered instruction payload is provider-agnostic: all four LLM
//! adapters receive the exact same text, so their outputs stay comparable.
//! Every numeric field degrades to "N/A" when missing instead of failing.

use crate::models::AnalysisContext;

/// Display form of an optional numeric, fixed decimal places, "N/A" sentinel.
pub fn safe(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}", decimals, v),
        _ => "N/A".to_string(),
    }
}

/// Position within the 52-week range as a whole percent, or "N/A".
fn range_position(price: Option<f64>, low: Option<f64>, high: Option<f64>) -> String {
    let p = price.unwrap_or(0.0);
    let l = low.unwrap_or(0.0);
    let h = high.unwrap_or(1.0);
    if h - l != 0.0 {
        format!("{:.0}", (p - l) / (h - l) * 100.0)
    } else {
        "N/A".to_string()
    }
}

fn volume_ratio(volume: Option<f64>, avg_volume: Option<f64>) -> String {
    match (volume, avg_volume) {
        (Some(v), Some(a)) if a > 0.0 => format!("{:.1}", v / a),
        _ => "N/A".to_string(),
    }
}

fn above_below(price: f64, reference: Option<f64>) -> &'static str {
    if price > reference.unwrap_or(0.0) {
        "above"
    } else {
        "below"
    }
}

/// Render the full analysis request, data block plus strict output-shape
/// rules. The rules pin the exact JSON schema and per-field minimum content
/// so every adapter's output is interchangeable.
pub fn build_prompt(ctx: &AnalysisContext) -> String {
    let price = ctx.price.unwrap_or(0.0);
    let change = ctx.change.unwrap_or(0.0);
    let sign = if change >= 0.0 { "+" } else { "" };

    format!(
        r#"You are an expert stock/crypto analyst writing for a personal trading terminal. Give a detailed, actionable analysis of {symbol}.

Current data:
- Price: ${price} ({sign}{change}% today)
- P/E: {pe} | Forward P/E: {forward_pe}
- 52W Range: ${low52} - ${high52} ({range_pos}% of range)
- 50-Day SMA: ${sma50} (price {vs_sma50})
- 200-Day SMA: ${sma200} (price {vs_sma200})
- RSI(14): {rsi}
- Bollinger: Upper ${bb_upper} / Lower ${bb_lower}
- Volume ratio vs average: {vol_ratio}x

RULES:
1. "summary" must be 3-4 sentences with specific price references and what they mean
2. "technicals" must have 3-5 signals, each with a specific "detail" sentence (not just a word)
3. "keyLevels" support and resistance must be specific dollar amounts based on the data
4. "shortTermOutlook" must be 2-3 sentences with specific price targets or ranges to watch
5. "risks" must be 3-4 DETAILED sentences (15+ words each) about specific risks for THIS stock right now — not generic words like "recession" or "competition". Reference actual market conditions, sector trends, valuation concerns, or technical breakdown levels.
6. "beginnerNotes" must be 4-5 sentences written in VERY simple, casual language like you're explaining to a friend who just started investing. NO jargon. Explain what the data actually means for them in plain english. Use phrases like "basically...", "think of it like...", "in simple terms...". Reference the actual numbers but explain what they mean. Tell them what the smart move might be in a friendly way.

Respond ONLY with valid JSON, no markdown, no backticks, no extra text:
{{"signal":"BULLISH","confidence":70,"summary":"3-4 detailed sentences","technicals":[{{"label":"Signal Name","type":"bull","detail":"Specific explanation sentence"}},{{"label":"Another Signal","type":"bear","detail":"Another specific explanation"}}],"keyLevels":{{"support":190.00,"resistance":230.00}},"shortTermOutlook":"2-3 detailed sentences with price levels","risks":["A full detailed sentence about a specific risk","Another full sentence about a different risk","A third detailed risk sentence"],"beginnerNotes":"4-5 casual, jargon-free sentences explaining what all this means for someone new to trading. Be friendly and specific."}}

signal must be BULLISH, BEARISH, or NEUTRAL. type must be bull, bear, or neutral. ONLY output valid JSON."#,
        symbol = ctx.symbol,
        price = safe(ctx.price, 2),
        sign = sign,
        change = safe(ctx.change, 2),
        pe = safe(ctx.pe, 1),
        forward_pe = safe(ctx.forward_pe, 1),
        low52 = safe(ctx.low52, 2),
        high52 = safe(ctx.high52, 2),
        range_pos = range_position(ctx.price, ctx.low52, ctx.high52),
        sma50 = safe(ctx.sma50, 2),
        vs_sma50 = above_below(price, ctx.sma50),
        sma200 = safe(ctx.sma200, 2),
        vs_sma200 = above_below(price, ctx.sma200),
        rsi = safe(ctx.rsi, 1),
        bb_upper = safe(ctx.bb_upper, 2),
        bb_lower = safe(ctx.bb_lower, 2),
        vol_ratio = volume_ratio(ctx.volume, ctx.avg_volume),
    )
}
