//! RSI (Relative Strength Index) indicator

use crate::models::candle::Candle;
use crate::models::indicators::RsiReading;

/// Calculate RSI over the trailing `period` closes
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiReading> {
    if candles.len() < period as usize + 1 {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let rsi = rsi_at(&closes, period as usize)?;

    Some(RsiReading { rsi })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiReading> {
    calculate_rsi(candles, 14)
}

/// RSI of the final value of `closes`, using simple gain/loss averages.
///
/// An all-loss window yields 0; a lossless window (including flat) yields 100.
pub(crate) fn rsi_at(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let window = &closes[closes.len() - period - 1..];
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;

    for pair in window.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gain_sum += change;
        } else {
            loss_sum += change.abs();
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Trailing RSI series: one value per index from `period` onward.
///
/// Feeds the stochastic-RSI computation.
pub(crate) fn rsi_series(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || closes.len() < period + 1 {
        return Vec::new();
    }

    (period..closes.len())
        .filter_map(|i| rsi_at(&closes[..=i], period))
        .collect()
}
