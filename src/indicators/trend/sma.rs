//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::SmaReading;

/// Calculate SMA over the trailing `period` closes
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<SmaReading> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let sma = math::sma(&closes, period as usize)?;

    Some(SmaReading { sma })
}

/// Calculate SMA with the default period (20)
pub fn calculate_sma_default(candles: &[Candle]) -> Option<SmaReading> {
    calculate_sma(candles, 20)
}
