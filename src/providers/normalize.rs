//! Provider-native payloads mapped into canonical records.
//!
//! Each adapter's output shape differs; these small pure transforms are the
//! only place those shapes are known. Everything past this point is a
//! canonical `Quote` or `ChartSeries`.

use serde_json::Value;

use crate::models::{point_label, ChartPoint, ChartSeries, Quote};

fn num(raw: &Value, key: &str) -> Option<f64> {
    raw.get(key).and_then(Value::as_f64).filter(|v| v.is_finite())
}

fn int(raw: &Value, key: &str) -> Option<u64> {
    raw.get(key)
        .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f as u64)))
}

fn short_name(symbol: &str) -> String {
    symbol.trim_end_matches("-USD").to_string()
}

/// One item of the v7 `quoteResponse.result` array.
pub fn quote_from_yahoo_v7(raw: &Value) -> Option<Quote> {
    let symbol = raw.get("symbol")?.as_str()?.to_string();
    let price = num(raw, "regularMarketPrice")?;
    let previous_close = num(raw, "regularMarketPreviousClose").unwrap_or(0.0);
    let change = num(raw, "regularMarketChange").unwrap_or(price - previous_close);
    let percent = num(raw, "regularMarketChangePercent")
        .or_else(|| Quote::percent_change(change, previous_close));

    Some(Quote {
        short_name: raw
            .get("shortName")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| short_name(&symbol)),
        symbol,
        regular_market_price: price,
        regular_market_change: change,
        regular_market_change_percent: percent,
        regular_market_previous_close: previous_close,
        regular_market_open: num(raw, "regularMarketOpen"),
        regular_market_day_high: num(raw, "regularMarketDayHigh"),
        regular_market_day_low: num(raw, "regularMarketDayLow"),
        fifty_two_week_high: num(raw, "fiftyTwoWeekHigh"),
        fifty_two_week_low: num(raw, "fiftyTwoWeekLow"),
        regular_market_volume: int(raw, "regularMarketVolume"),
        average_daily_volume_10_day: int(raw, "averageDailyVolume10Day"),
        market_cap: int(raw, "marketCap"),
        trailing_pe: num(raw, "trailingPE"),
        forward_pe: num(raw, "forwardPE"),
        trailing_eps: num(raw, "trailingEps"),
        beta: num(raw, "beta"),
        fifty_day_average: num(raw, "fiftyDayAverage"),
        two_hundred_day_average: num(raw, "twoHundredDayAverage"),
    })
}

/// The `chart.result[0].meta` object of a v8 chart body, used by the
/// session-free per-symbol scrape. Day fields missing from the meta fall back
/// to the last price so the record is still renderable.
pub fn quote_from_chart_meta(symbol: &str, body: &Value) -> Option<Quote> {
    let meta = body
        .get("chart")?
        .get("result")?
        .get(0)?
        .get("meta")?;
    let price = num(meta, "regularMarketPrice").filter(|p| *p > 0.0)?;
    let previous_close = num(meta, "chartPreviousClose")
        .or_else(|| num(meta, "previousClose"))
        .unwrap_or(0.0);
    let change = price - previous_close;

    Some(Quote {
        symbol: symbol.to_string(),
        short_name: meta
            .get("shortName")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| short_name(symbol)),
        regular_market_price: price,
        regular_market_change: change,
        regular_market_change_percent: Quote::percent_change(change, previous_close),
        regular_market_previous_close: previous_close,
        regular_market_open: num(meta, "regularMarketOpen").or(Some(price)),
        regular_market_day_high: num(meta, "regularMarketDayHigh").or(Some(price)),
        regular_market_day_low: num(meta, "regularMarketDayLow").or(Some(price)),
        fifty_two_week_high: num(meta, "fiftyTwoWeekHigh"),
        fifty_two_week_low: num(meta, "fiftyTwoWeekLow"),
        regular_market_volume: int(meta, "regularMarketVolume"),
        fifty_day_average: num(meta, "fiftyDayAverage"),
        two_hundred_day_average: num(meta, "twoHundredDayAverage"),
        ..Quote::default()
    })
}

/// Finnhub's terse quote shape: c/d/dp/pc/o/h/l. A zero or missing `c` means
/// the symbol is unknown to them.
pub fn quote_from_finnhub(symbol: &str, raw: &Value) -> Option<Quote> {
    let price = num(raw, "c").filter(|c| *c != 0.0)?;
    let previous_close = num(raw, "pc").unwrap_or(0.0);
    let change = num(raw, "d").unwrap_or(0.0);
    let percent = num(raw, "dp").or_else(|| Quote::percent_change(change, previous_close));

    Some(Quote {
        symbol: symbol.to_string(),
        short_name: short_name(symbol),
        regular_market_price: price,
        regular_market_change: change,
        regular_market_change_percent: percent,
        regular_market_previous_close: previous_close,
        regular_market_open: num(raw, "o"),
        regular_market_day_high: num(raw, "h"),
        regular_market_day_low: num(raw, "l"),
        ..Quote::default()
    })
}

/// A full v8 chart body into an ordered series. Points whose close is null
/// are dropped; the order of the rest is preserved.
pub fn series_from_yahoo_chart(
    symbol: &str,
    range: &str,
    interval: &str,
    body: &Value,
) -> Option<ChartSeries> {
    let result = body.get("chart")?.get("result")?.get(0)?;
    let timestamps = result.get("timestamp")?.as_array()?;
    if timestamps.is_empty() {
        return None;
    }
    let quote = result
        .get("indicators")?
        .get("quote")?
        .get(0)?;

    let series_field = |key: &str| -> &[Value] {
        quote
            .get(key)
            .and_then(Value::as_array)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    };
    let closes = series_field("close");
    let opens = series_field("open");
    let highs = series_field("high");
    let lows = series_field("low");
    let volumes = series_field("volume");

    let at = |arr: &[Value], i: usize| arr.get(i).and_then(Value::as_f64);

    let points = timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, ts)| {
            let timestamp = ts.as_i64()?;
            let close = at(closes, i)?;
            Some(ChartPoint {
                timestamp,
                label: point_label(range, timestamp),
                open: at(opens, i),
                high: at(highs, i),
                low: at(lows, i),
                close,
                volume: volumes.get(i).and_then(Value::as_u64).unwrap_or(0),
            })
        })
        .collect();

    Some(ChartSeries {
        symbol: symbol.to_string(),
        range: range.to_string(),
        interval: interval.to_string(),
        points,
    })
}
