//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::MacdReading;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of MACD
/// Histogram = MACD - Signal
///
/// Uses running EMAs seeded at the series start, so the signal line is
/// defined as soon as the slow period is covered.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdReading> {
    if candles.len() < slow_period as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast_series = math::ema_series(&closes, fast_period as usize);
    let slow_series = math::ema_series(&closes, slow_period as usize);

    let macd_series: Vec<f64> = fast_series
        .iter()
        .zip(slow_series.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();

    let signal_series = math::ema_series(&macd_series, signal_period as usize);

    let macd = *macd_series.last()?;
    let macd_signal = *signal_series.last()?;

    Some(MacdReading {
        macd,
        macd_signal,
        macd_histogram: macd - macd_signal,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdReading> {
    calculate_macd(candles, 12, 26, 9)
}
