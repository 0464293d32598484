//! Entry suggestions derived from a finished prediction.

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::prediction::{
    EntrySuggestion, EntryTiming, PositionSize, PredictionDirection, RiskTier,
};

const RANGE_WINDOW: usize = 14;

/// Build entry advice for a directional or neutral prediction.
pub fn suggest_entry(
    candles: &[Candle],
    direction: PredictionDirection,
    confidence: f64,
    risk: RiskTier,
) -> Option<EntrySuggestion> {
    if direction == PredictionDirection::Neutral {
        return Some(EntrySuggestion {
            entry_timing: EntryTiming::Avoid,
            position_size: None,
            stop_loss: None,
            take_profit: None,
            recommended_timeframes: None,
            reason: Some("No clear directional bias detected".to_string()),
        });
    }

    let price = candles.last()?.close;
    let avg_range = average_range(candles);

    let entry_timing = if confidence > 0.8 {
        EntryTiming::Immediate
    } else if confidence > 0.6 {
        EntryTiming::WaitForConfirmation
    } else {
        EntryTiming::Avoid
    };

    let position_size = if risk == RiskTier::High {
        PositionSize::Small
    } else {
        PositionSize::Normal
    };

    let (stop_loss, take_profit) = match (direction, avg_range) {
        (PredictionDirection::Call, Some(range)) => (
            Some(round4(price - range * 0.5)),
            Some(round4(price + range * 1.0)),
        ),
        (PredictionDirection::Put, Some(range)) => (
            Some(round4(price + range * 0.5)),
            Some(round4(price - range * 1.0)),
        ),
        _ => (None, None),
    };

    let recommended_timeframes = if confidence > 0.7 {
        vec!["5m".to_string(), "15m".to_string()]
    } else {
        vec!["1m".to_string(), "5m".to_string()]
    };

    Some(EntrySuggestion {
        entry_timing,
        position_size: Some(position_size),
        stop_loss,
        take_profit,
        recommended_timeframes: Some(recommended_timeframes),
        reason: None,
    })
}

/// Mean of rolling fourteen-candle high-to-low spans.
fn average_range(candles: &[Candle]) -> Option<f64> {
    if candles.len() < RANGE_WINDOW {
        return None;
    }

    let spans: Vec<f64> = candles
        .windows(RANGE_WINDOW)
        .filter_map(|window| {
            let high = math::highest(&window.iter().map(|c| c.high).collect::<Vec<_>>())?;
            let low = math::lowest(&window.iter().map(|c| c.low).collect::<Vec<_>>())?;
            Some(high - low)
        })
        .collect();
    math::mean(&spans)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
