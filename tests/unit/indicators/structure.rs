//! Unit tests for the market structure indicator family

use binarix::indicators::structure::{
    calculate_fibonacci_default, calculate_support_resistance, calculate_supertrend,
};
use binarix::models::candle::Candle;
use binarix::models::indicators::{PricePosition, TrendBias};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(i as i64)
}

#[test]
fn test_supertrend_between_bands_on_flat_series() {
    let candles: Vec<Candle> = (0..12)
        .map(|i| Candle::new(100.0, 102.0, 98.0, 100.0, 1000.0, ts(i)))
        .collect();

    // ATR 4, hl2 100: bands at 112 and 88, price sits on hl2
    let st = calculate_supertrend(&candles, 10, 3.0).unwrap();
    assert_eq!(st.supertrend_direction, TrendBias::Bearish);
    assert_eq!(st.supertrend_value, 112.0);
    assert_eq!(st.price_vs_supertrend, PricePosition::Below);
}

#[test]
fn test_supertrend_breakout_turns_bullish() {
    let mut candles: Vec<Candle> = (0..11)
        .map(|i| Candle::new(100.0, 100.05, 99.95, 100.0, 1000.0, ts(i)))
        .collect();
    // Wide breakout candle: close clears the upper band
    candles.push(Candle::new(100.0, 102.0, 100.0, 102.0, 1000.0, ts(11)));

    let st = calculate_supertrend(&candles, 10, 3.0).unwrap();
    assert_eq!(st.supertrend_direction, TrendBias::Bullish);
    // Lower band: hl2 101 minus 3 * ATR 0.29
    assert!((st.supertrend_value - 100.13).abs() < 1e-9);
    assert_eq!(st.price_vs_supertrend, PricePosition::Above);
}

#[test]
fn test_supertrend_needs_period_plus_one() {
    let candles: Vec<Candle> = (0..10)
        .map(|i| Candle::new(100.0, 102.0, 98.0, 100.0, 1000.0, ts(i)))
        .collect();
    assert!(calculate_supertrend(&candles, 10, 3.0).is_none());
}

#[test]
fn test_fibonacci_levels_are_monotonic() {
    let candles: Vec<Candle> = (0..30)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.9).sin() * 6.0;
            Candle::new(close, close + 2.0, close - 2.0, close, 1000.0, ts(i))
        })
        .collect();

    let fib = calculate_fibonacci_default(&candles).unwrap();
    assert_eq!(fib.fib_0, fib.window_high);
    assert_eq!(fib.fib_100, fib.window_low);
    assert!(fib.fib_0 > fib.fib_236);
    assert!(fib.fib_236 > fib.fib_382);
    assert!(fib.fib_382 > fib.fib_500);
    assert!(fib.fib_500 > fib.fib_618);
    assert!(fib.fib_618 > fib.fib_786);
    assert!(fib.fib_786 > fib.fib_100);
}

#[test]
fn test_support_resistance_clusters_repeated_pivots() {
    let highs = [
        104.0, 105.0, 106.0, 107.0, 108.0, 110.0, 108.0, 107.0, 106.0, 105.0, 104.0, 105.0,
        106.0, 108.0, 110.0, 108.0, 106.0, 105.0, 104.0, 103.0,
    ];
    let lows = [
        96.0, 95.5, 95.0, 94.5, 94.0, 93.5, 93.0, 92.0, 90.0, 92.0, 93.0, 93.5, 94.0, 93.0,
        92.0, 91.0, 90.0, 92.0, 93.0, 94.0,
    ];

    let candles: Vec<Candle> = highs
        .iter()
        .zip(lows.iter())
        .enumerate()
        .map(|(i, (&high, &low))| {
            let close = (high + low) / 2.0;
            Candle::new(close, high, low, close, 1000.0, ts(i))
        })
        .collect();

    let reading = calculate_support_resistance(&candles, 20).unwrap();

    // Two spikes at 110 cluster into one resistance, two dips at 90 into one support
    assert_eq!(reading.resistance_levels.len(), 1);
    assert_eq!(reading.support_levels.len(), 1);

    let resistance = reading.nearest_resistance.unwrap();
    assert_eq!(resistance.price, 110.0);
    assert_eq!(resistance.touches, 2);

    let support = reading.nearest_support.unwrap();
    assert_eq!(support.price, 90.0);
    assert_eq!(support.touches, 2);
}

#[test]
fn test_support_resistance_needs_the_lookback() {
    let candles: Vec<Candle> = (0..10)
        .map(|i| Candle::new(100.0, 101.0, 99.0, 100.0, 1000.0, ts(i)))
        .collect();
    assert!(calculate_support_resistance(&candles, 20).is_none());
}
