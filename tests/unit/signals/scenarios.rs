//! Market scenario tests for the prediction engine

use binarix::models::candle::Candle;
use binarix::models::prediction::{
    EntryTiming, MomentumState, PositionSize, PredictionDirection, RiskTier, TrendState,
    VolatilityTier,
};
use binarix::signals::{PredictOptions, PredictionEngine};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(i as i64)
}

/// Full-body candles stepping up one unit per bar.
fn create_uptrend_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let open = 100.0 + i as f64;
            Candle::new(
                open,
                open + 1.0,
                open,
                open + 1.0,
                1_000.0 + (i as f64 * 10.0),
                ts(i),
            )
        })
        .collect()
}

/// Full-body candles stepping down one unit per bar.
fn create_downtrend_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let open = 200.0 - i as f64;
            Candle::new(
                open,
                open,
                open - 1.0,
                open - 1.0,
                1_000.0 + (i as f64 * 10.0),
                ts(i),
            )
        })
        .collect()
}

/// Closes oscillating in a narrow band around 100.
fn create_ranging_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 + (i as f64).sin() * 0.5;
            Candle::new(close - 0.2, close + 0.6, close - 0.6, close, 1_000.0, ts(i))
        })
        .collect()
}

/// Closes whipsawing between 90 and 110 every bar.
fn create_volatile_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let (open, close) = if i % 2 == 0 { (90.0, 110.0) } else { (110.0, 90.0) };
            Candle::new(open, 111.0, 89.0, close, 1_000.0, ts(i))
        })
        .collect()
}

#[test]
fn test_strong_uptrend_predicts_call() {
    let candles = create_uptrend_candles(30);
    let prediction = PredictionEngine::predict(&candles, &PredictOptions::default());

    assert_eq!(prediction.direction, PredictionDirection::Call);
    assert!((prediction.confidence - 6.5 / 9.4).abs() < 1e-6);
    assert_eq!(prediction.risk_tier, RiskTier::Medium);
    assert!(
        prediction.signal_breakdown.bullish_weight > prediction.signal_breakdown.bearish_weight
    );
    assert_eq!(prediction.market_conditions.trend, TrendState::Bullish);
    assert_eq!(
        prediction.market_conditions.momentum,
        MomentumState::StrongBullish
    );
}

#[test]
fn test_strong_downtrend_predicts_put() {
    let candles = create_downtrend_candles(30);
    let prediction = PredictionEngine::predict(&candles, &PredictOptions::default());

    assert_eq!(prediction.direction, PredictionDirection::Put);
    assert!((prediction.confidence - 6.5 / 9.4).abs() < 1e-6);
    assert_eq!(prediction.market_conditions.trend, TrendState::Bearish);
}

#[test]
fn test_uptrend_entry_brackets_the_last_close() {
    let candles = create_uptrend_candles(30);
    let prediction = PredictionEngine::predict(&candles, &PredictOptions::default());

    // Rolling fourteen-bar spans are 14.0 on this series, last close 130
    let entry = prediction.entry_suggestion.expect("entry advice");
    assert_eq!(entry.entry_timing, EntryTiming::WaitForConfirmation);
    assert_eq!(entry.position_size, Some(PositionSize::Normal));
    assert_eq!(entry.stop_loss, Some(123.0));
    assert_eq!(entry.take_profit, Some(144.0));
    assert_eq!(
        entry.recommended_timeframes,
        Some(vec!["1m".to_string(), "5m".to_string()])
    );
}

#[test]
fn test_ranging_market_keeps_full_signal_roster() {
    let candles = create_ranging_candles(40);
    let prediction = PredictionEngine::predict(&candles, &PredictOptions::default());

    assert_eq!(prediction.detailed_signals.len(), 10);
    let breakdown = &prediction.signal_breakdown;
    assert_eq!(
        breakdown.bullish_count + breakdown.bearish_count + breakdown.neutral_count,
        10
    );
    assert!((0.0..=1.0).contains(&prediction.confidence));
    assert!((0.0..=1.0).contains(&breakdown.bullish_ratio));
    assert!((0.0..=1.0).contains(&breakdown.bearish_ratio));
}

#[test]
fn test_volatile_market_raises_risk() {
    let candles = create_volatile_candles(40);
    let prediction = PredictionEngine::predict(&candles, &PredictOptions::default());

    assert_eq!(prediction.risk_tier, RiskTier::High);
    assert_eq!(
        prediction.market_conditions.volatility,
        VolatilityTier::High
    );
}

#[test]
fn test_custom_threshold_blocks_weak_majority() {
    let candles = create_uptrend_candles(30);
    let options = PredictOptions {
        decision_threshold: 0.75,
        ..PredictOptions::default()
    };
    let prediction = PredictionEngine::predict(&candles, &options);

    assert_eq!(prediction.direction, PredictionDirection::Neutral);
    assert!((prediction.confidence - (1.0 - 3.6 / 9.4)).abs() < 1e-6);
}

#[test]
fn test_short_series_absorbs_unavailable_indicators() {
    // Twenty candles: MACD and stochastic RSI cannot compute yet
    let candles = create_uptrend_candles(20);
    let prediction = PredictionEngine::predict(&candles, &PredictOptions::default());

    let unavailable = prediction
        .detailed_signals
        .iter()
        .filter(|signal| signal.reason.starts_with("unavailable:"))
        .count();
    assert_eq!(unavailable, 2);
    assert_eq!(prediction.direction, PredictionDirection::Call);
}
