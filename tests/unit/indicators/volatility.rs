//! Unit tests for the volatility indicator family

use binarix::indicators::volatility::{calculate_atr, calculate_bollinger_bands};
use binarix::models::candle::Candle;
use chrono::{DateTime, Duration, TimeZone, Utc};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(i as i64)
}

#[test]
fn test_atr_averages_true_ranges() {
    let candles = vec![
        Candle::new(10.0, 11.0, 9.0, 10.0, 1000.0, ts(0)),
        Candle::new(10.0, 12.0, 10.0, 11.0, 1000.0, ts(1)),
        Candle::new(11.0, 13.0, 11.0, 12.0, 1000.0, ts(2)),
    ];

    let atr = calculate_atr(&candles, 2).unwrap();
    assert_eq!(atr.atr, 2.0);
}

#[test]
fn test_atr_counts_gaps_against_previous_close() {
    let candles = vec![
        Candle::new(10.0, 10.5, 9.5, 10.0, 1000.0, ts(0)),
        Candle::new(11.6, 12.0, 11.5, 11.8, 1000.0, ts(1)),
    ];

    // High-low is only 0.5 but the gap from the prior close is 2.0
    let atr = calculate_atr(&candles, 1).unwrap();
    assert_eq!(atr.atr, 2.0);
}

#[test]
fn test_atr_needs_period_plus_one() {
    let candles = vec![
        Candle::new(10.0, 11.0, 9.0, 10.0, 1000.0, ts(0)),
        Candle::new(10.0, 11.0, 9.0, 10.0, 1000.0, ts(1)),
    ];
    assert!(calculate_atr(&candles, 2).is_none());
}

#[test]
fn test_bollinger_bands_from_hand_computed_deviation() {
    let closes = [2.0, 4.0, 6.0, 8.0];
    let candles: Vec<Candle> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle::new(close, close + 1.0, close - 1.0, close, 1000.0, ts(i)))
        .collect();

    let bands = calculate_bollinger_bands(&candles, 4, 2.0).unwrap();
    assert_eq!(bands.bb_middle, 5.0);
    assert!((bands.bb_upper - (5.0 + 2.0 * 5.0f64.sqrt())).abs() < 1e-12);
    assert!((bands.bb_lower - (5.0 - 2.0 * 5.0f64.sqrt())).abs() < 1e-12);
}

#[test]
fn test_bollinger_bands_collapse_on_flat_closes() {
    let candles: Vec<Candle> = (0..20)
        .map(|i| Candle::new(100.0, 100.5, 99.5, 100.0, 1000.0, ts(i)))
        .collect();

    let bands = calculate_bollinger_bands(&candles, 20, 2.0).unwrap();
    assert_eq!(bands.bb_upper, 100.0);
    assert_eq!(bands.bb_middle, 100.0);
    assert_eq!(bands.bb_lower, 100.0);
}
