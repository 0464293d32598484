//! Unit tests for the momentum indicator family

use binarix::indicators::momentum::{
    calculate_macd, calculate_rsi, calculate_stoch_rsi_default, calculate_stochastic,
};
use binarix::models::candle::Candle;
use chrono::{DateTime, Duration, TimeZone, Utc};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(i as i64)
}

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle::new(close, close + 0.5, close - 0.5, close, 1000.0, ts(i)))
        .collect()
}

fn rising_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn test_rsi_from_hand_computed_averages() {
    // Gains 1.0, 1.0, 0.5 and one 0.5 loss over a 4-period window
    let candles = candles_from_closes(&[10.0, 11.0, 10.5, 11.5, 12.0]);
    let rsi = calculate_rsi(&candles, 4).unwrap().rsi;

    // avg gain 0.625, avg loss 0.125, RS = 5
    assert!((rsi - (100.0 - 100.0 / 6.0)).abs() < 1e-12);
}

#[test]
fn test_macd_positive_in_a_steady_rise() {
    let candles = candles_from_closes(&rising_closes(40));
    let macd = calculate_macd(&candles, 12, 26, 9).unwrap();

    assert!(macd.macd > 0.0);
    assert!(macd.macd > macd.macd_signal);
    assert!((macd.macd_histogram - (macd.macd - macd.macd_signal)).abs() < 1e-12);
}

#[test]
fn test_macd_needs_the_slow_period() {
    let candles = candles_from_closes(&rising_closes(25));
    assert!(calculate_macd(&candles, 12, 26, 9).is_none());
}

#[test]
fn test_stochastic_pins_to_extremes() {
    // Close is always the window high, so raw %K stays at 100
    let candles: Vec<Candle> = (0..30)
        .map(|i| {
            let close = 100.0 + i as f64;
            Candle::new(close - 1.0, close, close - 2.0, close, 1000.0, ts(i))
        })
        .collect();

    let stoch = calculate_stochastic(&candles, 14, 3, 3).unwrap();
    assert_eq!(stoch.stoch_k, 100.0);
    assert_eq!(stoch.stoch_d, 100.0);
}

#[test]
fn test_stochastic_reads_flat_window_as_midpoint() {
    let candles: Vec<Candle> = (0..30)
        .map(|i| Candle::new(100.0, 101.0, 99.0, 100.0, 1000.0, ts(i)))
        .collect();

    let stoch = calculate_stochastic(&candles, 14, 3, 3).unwrap();
    assert_eq!(stoch.stoch_k, 50.0);
    assert_eq!(stoch.stoch_d, 50.0);
}

#[test]
fn test_stoch_rsi_is_midpoint_when_rsi_is_pinned() {
    // A one-way rise pins RSI at 100, flattening its stochastic
    let candles = candles_from_closes(&rising_closes(40));
    let stoch_rsi = calculate_stoch_rsi_default(&candles).unwrap();

    assert_eq!(stoch_rsi.stoch_rsi_k, 50.0);
    assert_eq!(stoch_rsi.stoch_rsi_d, 50.0);
}

#[test]
fn test_stoch_rsi_needs_a_long_series() {
    let candles = candles_from_closes(&rising_closes(30));
    assert!(calculate_stoch_rsi_default(&candles).is_none());
}
