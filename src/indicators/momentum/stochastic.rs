//! Stochastic oscillator indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::StochasticReading;

/// Calculate the stochastic oscillator
///
/// Raw %K = 100 * (close - lowest low) / (highest high - lowest low)
/// %K = SMA(smooth_k) of raw %K, %D = SMA(d_period) of %K
///
/// A flat high/low window reads as 50.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: u32,
    d_period: u32,
    smooth_k: u32,
) -> Option<StochasticReading> {
    let raw = raw_k_series(candles, k_period as usize);
    let k_series = math::sma_series(&raw, smooth_k as usize);
    let d_series = math::sma_series(&k_series, d_period as usize);

    Some(StochasticReading {
        stoch_k: *k_series.last()?,
        stoch_d: *d_series.last()?,
    })
}

/// Calculate the stochastic oscillator with default parameters (14, 3, 3)
pub fn calculate_stochastic_default(candles: &[Candle]) -> Option<StochasticReading> {
    calculate_stochastic(candles, 14, 3, 3)
}

fn raw_k_series(candles: &[Candle], k_period: usize) -> Vec<f64> {
    if k_period == 0 || candles.len() < k_period {
        return Vec::new();
    }

    (k_period - 1..candles.len())
        .map(|i| {
            let window = &candles[i + 1 - k_period..=i];
            let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
            let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);

            if highest == lowest {
                50.0
            } else {
                (candles[i].close - lowest) / (highest - lowest) * 100.0
            }
        })
        .collect()
}
