//! Unit tests for the volume indicator family

use binarix::indicators::volume::{calculate_obv, calculate_volume_ma, calculate_vwap};
use binarix::models::candle::Candle;
use binarix::models::indicators::{PricePosition, TrendBias, VolumeLevel};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(i as i64)
}

fn candle(close: f64, volume: f64, i: usize) -> Candle {
    Candle::new(close, close + 0.5, close - 0.5, close, volume, ts(i))
}

#[test]
fn test_vwap_weights_by_volume() {
    let candles = vec![
        Candle::new(10.0, 12.0, 8.0, 10.0, 100.0, ts(0)),
        Candle::new(20.0, 22.0, 18.0, 20.0, 300.0, ts(1)),
    ];

    // Typical prices 10 and 20, weighted 1:3
    let vwap = calculate_vwap(&candles).unwrap();
    assert!((vwap.vwap - 17.5).abs() < 1e-12);
    assert_eq!(vwap.price_vs_vwap, PricePosition::Above);
    assert!((vwap.vwap_distance_pct - 2.5 / 17.5 * 100.0).abs() < 1e-9);
}

#[test]
fn test_vwap_requires_volume() {
    let candles = vec![Candle::new(10.0, 12.0, 8.0, 10.0, 0.0, ts(0))];
    assert!(calculate_vwap(&candles).is_none());
}

#[test]
fn test_obv_trend_over_five_steps() {
    let candles: Vec<Candle> = (0..6).map(|i| candle(100.0 + i as f64, 100.0, i)).collect();
    let obv = calculate_obv(&candles).unwrap();

    assert_eq!(obv.obv, 500.0);
    assert_eq!(obv.obv_trend, Some(TrendBias::Bullish));
}

#[test]
fn test_obv_ignores_flat_closes() {
    let candles = vec![
        candle(100.0, 100.0, 0),
        candle(100.0, 250.0, 1),
        candle(101.0, 50.0, 2),
    ];
    let obv = calculate_obv(&candles).unwrap();
    assert_eq!(obv.obv, 50.0);
}

#[test]
fn test_volume_ma_flags_volume_spikes() {
    let candles = vec![
        candle(100.0, 100.0, 0),
        candle(100.0, 100.0, 1),
        candle(100.0, 100.0, 2),
        candle(100.0, 300.0, 3),
    ];

    let reading = calculate_volume_ma(&candles, 4).unwrap();
    assert_eq!(reading.volume_ma, 150.0);
    assert_eq!(reading.volume_ratio, 2.0);
    assert_eq!(reading.volume_level, VolumeLevel::High);
}

#[test]
fn test_volume_ma_flags_volume_droughts() {
    let candles = vec![
        candle(100.0, 100.0, 0),
        candle(100.0, 100.0, 1),
        candle(100.0, 100.0, 2),
        candle(100.0, 40.0, 3),
    ];

    let reading = calculate_volume_ma(&candles, 4).unwrap();
    assert_eq!(reading.volume_level, VolumeLevel::Low);
}

#[test]
fn test_volume_ma_normal_band() {
    let candles: Vec<Candle> = (0..5).map(|i| candle(100.0, 100.0, i)).collect();
    let reading = calculate_volume_ma(&candles, 5).unwrap();
    assert_eq!(reading.volume_ratio, 1.0);
    assert_eq!(reading.volume_level, VolumeLevel::Normal);
}
