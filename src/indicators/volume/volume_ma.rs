//! Volume moving-average indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::{VolumeLevel, VolumeMaReading};

/// Calculate the volume moving average and the current volume's level
///
/// Level is high above 1.5x the average, low below 0.5x, normal between.
pub fn calculate_volume_ma(candles: &[Candle], period: u32) -> Option<VolumeMaReading> {
    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let volume_ma = math::sma(&volumes, period as usize)?;
    if volume_ma <= 0.0 {
        return None;
    }

    let current_volume = candles.last()?.volume;
    let volume_ratio = current_volume / volume_ma;
    let volume_level = if volume_ratio > 1.5 {
        VolumeLevel::High
    } else if volume_ratio < 0.5 {
        VolumeLevel::Low
    } else {
        VolumeLevel::Normal
    };

    Some(VolumeMaReading {
        volume_ma,
        current_volume,
        volume_ratio,
        volume_level,
    })
}

/// Calculate the volume moving average with the default period (20)
pub fn calculate_volume_ma_default(candles: &[Candle]) -> Option<VolumeMaReading> {
    calculate_volume_ma(candles, 20)
}
