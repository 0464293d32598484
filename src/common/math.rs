//! Numeric helpers shared by the indicator modules.
//!
//! All window-based helpers operate on the trailing `period` elements of the
//! input slice and return `None` when the slice is too short.

/// Arithmetic mean of a slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple Moving Average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential Moving Average over the whole slice.
///
/// Seeded with the SMA of the first `period` values, then updated
/// recursively with k = 2 / (period + 1).
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    let mut current = seed;
    for value in &values[period..] {
        current = ema_from_previous(*value, current, period);
    }
    Some(current)
}

/// One EMA step from the previous EMA value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = 2.0 / (period as f64 + 1.0);
    value * k + previous * (1.0 - k)
}

/// Running EMA series seeded at the first value.
///
/// Produces one output per input, which keeps derived series (MACD and its
/// signal line) defined near the start of short inputs.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(values.len());
    let mut current = values[0];
    out.push(current);
    for value in &values[1..] {
        current = ema_from_previous(*value, current, period);
        out.push(current);
    }
    out
}

/// Rolling SMA: one value per full window of `period` elements.
pub fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    values
        .windows(period)
        .map(|w| w.iter().sum::<f64>() / period as f64)
        .collect()
}

/// Population standard deviation over the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let window = &values[values.len() - period..];
    let avg = window.iter().sum::<f64>() / period as f64;
    let variance = window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// Sample standard deviation (n - 1 denominator) over the whole slice.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let avg = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// True Range for a candle given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Simple close-to-close returns: (v[i] - v[i-1]) / v[i-1].
pub fn pct_changes(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

/// Highest value in a slice.
pub fn highest(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Lowest value in a slice.
pub fn lowest(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}
