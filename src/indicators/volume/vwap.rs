//! VWAP (Volume Weighted Average Price) indicator

use crate::models::candle::Candle;
use crate::models::indicators::{PricePosition, VwapReading};

/// Calculate VWAP cumulatively over the series
///
/// VWAP = Σ(typical price * volume) / Σ(volume), typical = (H + L + C) / 3.
/// Requires non-zero total volume.
pub fn calculate_vwap(candles: &[Candle]) -> Option<VwapReading> {
    let total_volume: f64 = candles.iter().map(|c| c.volume).sum();
    if candles.is_empty() || total_volume <= 0.0 {
        return None;
    }

    let weighted_sum: f64 = candles
        .iter()
        .map(|c| (c.high + c.low + c.close) / 3.0 * c.volume)
        .sum();
    let vwap = weighted_sum / total_volume;

    let price = candles.last()?.close;
    let price_vs_vwap = if price > vwap {
        PricePosition::Above
    } else {
        PricePosition::Below
    };
    let vwap_distance_pct = if vwap != 0.0 {
        (price - vwap) / vwap * 100.0
    } else {
        0.0
    };

    Some(VwapReading {
        vwap,
        price_vs_vwap,
        vwap_distance_pct,
    })
}
