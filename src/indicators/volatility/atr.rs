//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::AtrReading;

/// Calculate ATR (Average True Range)
///
/// ATR measures market volatility by averaging true range over a period
pub fn calculate_atr(candles: &[Candle], period: u32) -> Option<AtrReading> {
    if candles.len() < period as usize + 1 {
        return None;
    }

    let mut tr_values = Vec::new();
    for i in 1..candles.len() {
        let tr = math::true_range(candles[i].high, candles[i].low, candles[i - 1].close);
        tr_values.push(tr);
    }

    let atr = math::sma(&tr_values, period as usize)?;

    Some(AtrReading { atr })
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(candles: &[Candle]) -> Option<AtrReading> {
    calculate_atr(candles, 14)
}
