//! SuperTrend indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::{PricePosition, SuperTrendReading, TrendBias};

/// Calculate SuperTrend indicator
///
/// Bands sit at hl2 +/- multiplier * ATR(period); the active band is the
/// lower one in an uptrend and the upper one in a downtrend.
pub fn calculate_supertrend(
    candles: &[Candle],
    period: u32,
    multiplier: f64,
) -> Option<SuperTrendReading> {
    if candles.len() < period as usize + 1 {
        return None;
    }

    let mut tr_values = Vec::new();
    for i in 1..candles.len() {
        let tr = math::true_range(candles[i].high, candles[i].low, candles[i - 1].close);
        tr_values.push(tr);
    }

    let atr = math::sma(&tr_values, period as usize)?;

    let last = candles.last()?;
    let hl2 = (last.high + last.low) / 2.0;
    let upper_band = hl2 + (multiplier * atr);
    let lower_band = hl2 - (multiplier * atr);

    let price = last.close;
    let direction = if price > upper_band {
        TrendBias::Bullish
    } else if price < lower_band {
        TrendBias::Bearish
    } else if price > hl2 {
        // Between the bands: fall back to price position around hl2
        TrendBias::Bullish
    } else {
        TrendBias::Bearish
    };

    let supertrend_value = match direction {
        TrendBias::Bullish => lower_band,
        TrendBias::Bearish => upper_band,
    };

    let price_vs_supertrend = if price > supertrend_value {
        PricePosition::Above
    } else {
        PricePosition::Below
    };

    Some(SuperTrendReading {
        supertrend_value,
        supertrend_direction: direction,
        price_vs_supertrend,
    })
}

/// Calculate SuperTrend with default parameters (10, 3)
pub fn calculate_supertrend_default(candles: &[Candle]) -> Option<SuperTrendReading> {
    calculate_supertrend(candles, 10, 3.0)
}
