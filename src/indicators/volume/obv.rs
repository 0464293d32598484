//! OBV (On-Balance Volume) indicator

use crate::models::candle::Candle;
use crate::models::indicators::{ObvReading, TrendBias};

/// Calculate OBV (On-Balance Volume)
///
/// Cumulative volume, added on up-closes and subtracted on down-closes.
/// The trend compares the latest OBV against its value 5 steps back and is
/// omitted on shorter series.
pub fn calculate_obv(candles: &[Candle]) -> Option<ObvReading> {
    if candles.len() < 2 {
        return None;
    }

    let mut series = Vec::with_capacity(candles.len());
    let mut obv = 0.0;
    series.push(obv);

    for i in 1..candles.len() {
        if candles[i].close > candles[i - 1].close {
            obv += candles[i].volume;
        } else if candles[i].close < candles[i - 1].close {
            obv -= candles[i].volume;
        }
        series.push(obv);
    }

    let obv_trend = if series.len() >= 5 {
        let earlier = series[series.len() - 5];
        if obv > earlier {
            Some(TrendBias::Bullish)
        } else if obv < earlier {
            Some(TrendBias::Bearish)
        } else {
            None
        }
    } else {
        None
    };

    Some(ObvReading { obv, obv_trend })
}
