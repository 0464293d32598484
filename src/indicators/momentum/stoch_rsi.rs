//! Stochastic RSI indicator

use crate::common::math;
use crate::indicators::momentum::rsi::rsi_series;
use crate::models::candle::Candle;
use crate::models::indicators::StochRsiReading;

/// Calculate the stochastic RSI
///
/// Applies the stochastic formula to an RSI series instead of raw prices.
/// %K is smoothed over `k`; %D is a 3-period SMA of %K. A flat RSI window
/// reads as 50.
pub fn calculate_stoch_rsi(
    candles: &[Candle],
    rsi_period: u32,
    stoch_period: u32,
    k: u32,
) -> Option<StochRsiReading> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let rsi_values = rsi_series(&closes, rsi_period as usize);

    let raw = stoch_of(&rsi_values, stoch_period as usize);
    let k_series = math::sma_series(&raw, k as usize);
    let d_series = math::sma_series(&k_series, 3);

    Some(StochRsiReading {
        stoch_rsi_k: *k_series.last()?,
        stoch_rsi_d: *d_series.last()?,
    })
}

/// Calculate the stochastic RSI with default parameters (14, 14, 3)
pub fn calculate_stoch_rsi_default(candles: &[Candle]) -> Option<StochRsiReading> {
    calculate_stoch_rsi(candles, 14, 14, 3)
}

fn stoch_of(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    (period - 1..values.len())
        .map(|i| {
            let window = &values[i + 1 - period..=i];
            let highest = window.iter().copied().fold(f64::MIN, f64::max);
            let lowest = window.iter().copied().fold(f64::MAX, f64::min);

            if highest == lowest {
                50.0
            } else {
                (values[i] - lowest) / (highest - lowest) * 100.0
            }
        })
        .collect()
}
