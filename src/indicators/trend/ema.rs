//! EMA (Exponential Moving Average) indicator

use std::collections::BTreeMap;

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::EmaReading;

/// Calculate EMAs for the requested periods
///
/// Periods the series is too short for are omitted from the reading;
/// returns None when no period is computable.
pub fn calculate_ema(candles: &[Candle], periods: &[u32]) -> Option<EmaReading> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let mut values = BTreeMap::new();
    for &period in periods {
        if let Some(value) = math::ema(&closes, period as usize) {
            values.insert(format!("ema_{}", period), value);
        }
    }

    if values.is_empty() {
        return None;
    }
    Some(EmaReading { values })
}

/// Calculate EMA with the default period (20)
pub fn calculate_ema_default(candles: &[Candle]) -> Option<EmaReading> {
    calculate_ema(candles, &[20])
}
