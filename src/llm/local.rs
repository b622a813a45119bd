//! Rule-based local analysis: the terminal, always-available provider in the
//! analysis chain. Pure arithmetic over the already-validated context, so it
//! cannot fail and needs no credential or network.

use async_trait::async_trait;

use super::prompt::safe;
use crate::constants::scoring;
use crate::error::ProviderResult;
use crate::models::{
    AnalysisContext, AnalysisResult, KeyLevels, Signal, SignalKind, TechnicalSignal,
};
use crate::providers::traits::AnalysisProvider;

pub struct LocalAnalysis;

#[async_trait]
impl AnalysisProvider for LocalAnalysis {
    fn name(&self) -> &'static str {
        "local-analysis"
    }

    async fn analyze(
        &self,
        _prompt: &str,
        context: &AnalysisContext,
    ) -> ProviderResult<AnalysisResult> {
        Ok(run_local_analysis(context))
    }
}

fn signal_entry(label: String, kind: SignalKind, detail: String) -> TechnicalSignal {
    TechnicalSignal { label, kind, detail }
}

/// Bull/bear point scoring over SMA position, RSI extremes, daily move
/// magnitude, and volume surge. Deterministic: the same context always yields
/// the same signal, confidence, and technicals.
pub fn run_local_analysis(ctx: &AnalysisContext) -> AnalysisResult {
    let p = ctx.price.unwrap_or(0.0);
    let r = ctx.rsi.unwrap_or(50.0);
    let chg = ctx.change.unwrap_or(0.0);
    let s50 = ctx.sma50.unwrap_or(p);
    let s200 = ctx.sma200.unwrap_or(p);
    let vol = ctx.volume.unwrap_or(0.0);
    let avg_vol = match ctx.avg_volume {
        Some(v) if v != 0.0 => v,
        _ => 1.0,
    };
    let h52 = ctx.high52.unwrap_or(p * 1.2);
    let l52 = ctx.low52.unwrap_or(p * 0.8);

    let mut bull_points = 0i32;
    let mut bear_points = 0i32;
    let mut technicals = Vec::new();

    if p > s50 {
        bull_points += scoring::SMA_POINTS;
        technicals.push(signal_entry(
            "Above 50 SMA".to_string(),
            SignalKind::Bull,
            format!("Price above {}", safe(ctx.sma50, 2)),
        ));
    } else {
        bear_points += scoring::SMA_POINTS;
        technicals.push(signal_entry(
            "Below 50 SMA".to_string(),
            SignalKind::Bear,
            format!("Price below {}", safe(ctx.sma50, 2)),
        ));
    }

    if p > s200 {
        bull_points += scoring::SMA_POINTS;
        technicals.push(signal_entry(
            "Above 200 SMA".to_string(),
            SignalKind::Bull,
            "Long-term uptrend intact".to_string(),
        ));
    } else {
        bear_points += scoring::SMA_POINTS;
        technicals.push(signal_entry(
            "Below 200 SMA".to_string(),
            SignalKind::Bear,
            "Long-term trend broken".to_string(),
        ));
    }

    if r > scoring::RSI_OVERBOUGHT {
        bear_points += scoring::RSI_POINTS;
        technicals.push(signal_entry(
            format!("RSI {:.0} Overbought", r),
            SignalKind::Bear,
            "May be due for pullback".to_string(),
        ));
    } else if r < scoring::RSI_OVERSOLD {
        bull_points += scoring::RSI_POINTS;
        technicals.push(signal_entry(
            format!("RSI {:.0} Oversold", r),
            SignalKind::Bull,
            "Potential bounce zone".to_string(),
        ));
    } else {
        technicals.push(signal_entry(
            format!("RSI {:.0} Neutral", r),
            SignalKind::Neutral,
            "No extreme momentum".to_string(),
        ));
    }

    if chg > scoring::DAILY_MOVE_THRESHOLD_PCT {
        bull_points += scoring::DAILY_MOVE_POINTS;
        technicals.push(signal_entry(
            format!("Up {:.1}% today", chg),
            SignalKind::Bull,
            "Strong daily move".to_string(),
        ));
    } else if chg < -scoring::DAILY_MOVE_THRESHOLD_PCT {
        bear_points += scoring::DAILY_MOVE_POINTS;
        technicals.push(signal_entry(
            format!("Down {:.1}% today", chg.abs()),
            SignalKind::Bear,
            "Significant selling".to_string(),
        ));
    }

    // Volume surge is a qualitative tag only; no points either way.
    if vol > avg_vol * scoring::VOLUME_SURGE_RATIO {
        let (kind, detail) = if chg > 0.0 {
            (SignalKind::Bull, "Buying conviction")
        } else {
            (SignalKind::Bear, "Selling pressure")
        };
        technicals.push(signal_entry(
            format!("Volume {:.1}x avg", vol / avg_vol),
            kind,
            detail.to_string(),
        ));
    }

    let signal = if bull_points > bear_points + 1 {
        Signal::Bullish
    } else if bear_points > bull_points + 1 {
        Signal::Bearish
    } else {
        Signal::Neutral
    };
    let confidence = scoring::CONFIDENCE_CAP
        .min(scoring::CONFIDENCE_BASE + (bull_points - bear_points).abs() * scoring::CONFIDENCE_PER_POINT)
        as u8;

    let range_pct = if h52 - l52 > 0.0 {
        format!("{:.0}", (p - l52) / (h52 - l52) * 100.0)
    } else {
        "50".to_string()
    };

    let summary = format!(
        "{} is trading at ${} ({}{:.2}% today). The stock is {} its 50-day moving average with RSI at {:.0}, sitting at {}% of its 52-week range.",
        ctx.symbol,
        safe(ctx.price, 2),
        if chg >= 0.0 { "+" } else { "" },
        chg,
        if p > s50 { "above" } else { "below" },
        r,
        range_pct,
    );

    let short_term_outlook = format!(
        "Watch the ${} level (50-day SMA) as key {}. {}",
        safe(ctx.sma50, 2),
        if p > s50 { "support" } else { "resistance" },
        if r > 65.0 {
            "RSI is elevated — momentum may slow."
        } else if r < 35.0 {
            "RSI suggests oversold conditions — watch for a bounce."
        } else {
            "Momentum is neutral."
        },
    );

    let risks = vec![
        if p > h52 * 0.95 {
            format!(
                "Trading near 52-week high (${}) — upside may be limited without a strong catalyst, and profit-taking could trigger a pullback",
                safe(ctx.high52, 2)
            )
        } else {
            format!(
                "Currently {:.0}% below the 52-week high of ${} — while this creates recovery potential, it also signals sustained selling pressure that may continue",
                (1.0 - p / h52) * 100.0,
                safe(ctx.high52, 2)
            )
        },
        if vol > avg_vol * 2.0 {
            format!(
                "Volume is {:.1}x the 10-day average, indicating heightened volatility — large moves in either direction are more likely in the near term",
                vol / avg_vol
            )
        } else {
            "Volume is near average levels — watch for a spike in volume to confirm any breakout or breakdown from current levels".to_string()
        },
        if r > 65.0 {
            format!(
                "RSI at {:.0} is approaching overbought territory — momentum traders may start taking profits, which could cap short-term gains",
                r
            )
        } else if r < 35.0 {
            format!(
                "RSI at {:.0} is in oversold territory — while this can signal a bounce, oversold conditions can persist during strong downtrends",
                r
            )
        } else {
            format!(
                "Macro uncertainty including interest rate policy and sector rotation could impact {} regardless of its technical setup",
                ctx.symbol
            )
        },
    ];

    let beginner_notes = beginner_notes(ctx, p, r, chg, s50);

    AnalysisResult {
        signal,
        confidence,
        summary,
        technicals,
        key_levels: Some(KeyLevels {
            support: round2(l52 + (p - l52) * 0.3),
            resistance: round2(p + (h52 - p) * 0.4),
        }),
        short_term_outlook,
        risks,
        beginner_notes,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn beginner_notes(ctx: &AnalysisContext, p: f64, r: f64, chg: f64, s50: f64) -> String {
    let trend = if p > s50 {
        "That's generally a good sign — it means the stock has momentum going for it."
    } else {
        "That's not great — it means the stock has been losing steam compared to recent weeks."
    };
    let rsi_note = if r > 70.0 {
        "which basically means a LOT of people have been buying and it might be getting expensive, so be careful jumping in right now".to_string()
    } else if r < 30.0 {
        "which means it's been beaten down pretty hard, and sometimes that means it's a bargain, but it could also keep dropping".to_string()
    } else {
        "which is pretty neutral, meaning there's no extreme buying or selling pressure right now".to_string()
    };
    let day_note = if chg > 2.0 {
        format!("It had a solid green day today, up {:.1}%, so buyers are showing up.", chg)
    } else if chg < -2.0 {
        format!("It dropped {:.1}% today, so there's definitely some selling going on.", chg.abs())
    } else {
        "Today's move was pretty small, nothing dramatic.".to_string()
    };
    let advice = if r < 35.0 && p < s50 {
        "this might look like a deal but be cautious — stocks can stay cheap for a while before bouncing back. Don't put in more than you're okay losing."
    } else if p > s50 && r < 65.0 {
        "the overall trend looks okay, but always do your own research and never invest money you can't afford to lose."
    } else {
        "it's probably best to watch this one for a bit before making any moves, and definitely don't bet the farm on one stock."
    };

    format!(
        "Okay so here's the deal with {} in plain english. The stock is at ${} right now, which is {} where it's been trading on average lately (${}). {} The RSI is at {:.0} — {}. {} If you're new to this, {}",
        ctx.symbol,
        safe(ctx.price, 2),
        if p > s50 { "above" } else { "below" },
        safe(ctx.sma50, 2),
        trend,
        r,
        rsi_note,
        day_note,
        advice,
    )
}
