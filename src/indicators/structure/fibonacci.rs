//! Fibonacci retracement levels

use crate::models::candle::Candle;
use crate::models::indicators::FibonacciReading;

const RATIOS: [(&str, f64); 7] = [
    ("fib_0", 0.0),
    ("fib_236", 0.236),
    ("fib_382", 0.382),
    ("fib_500", 0.5),
    ("fib_618", 0.618),
    ("fib_786", 0.786),
    ("fib_100", 1.0),
];

/// Calculate Fibonacci retracement levels
///
/// Levels retrace from the swing high over up to `lookback` trailing
/// candles; fib_0 is the window high, fib_100 the window low.
pub fn calculate_fibonacci(candles: &[Candle], lookback: u32) -> Option<FibonacciReading> {
    if candles.len() < 2 {
        return None;
    }

    let start = candles.len().saturating_sub(lookback as usize);
    let window = &candles[start..];

    let window_high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let window_low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let range = window_high - window_low;

    let levels: Vec<(&str, f64)> = RATIOS
        .iter()
        .map(|(name, ratio)| (*name, window_high - ratio * range))
        .collect();

    let price = candles.last()?.close;
    let (nearest_level, nearest_value) = levels
        .iter()
        .min_by(|a, b| {
            (price - a.1)
                .abs()
                .partial_cmp(&(price - b.1).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .copied()?;

    let distance_to_level_pct = if price != 0.0 {
        (price - nearest_value) / price * 100.0
    } else {
        0.0
    };

    Some(FibonacciReading {
        window_high,
        window_low,
        fib_0: levels[0].1,
        fib_236: levels[1].1,
        fib_382: levels[2].1,
        fib_500: levels[3].1,
        fib_618: levels[4].1,
        fib_786: levels[5].1,
        fib_100: levels[6].1,
        nearest_level: nearest_level.to_string(),
        distance_to_level_pct,
    })
}

/// Calculate Fibonacci retracements with the default lookback (50)
pub fn calculate_fibonacci_default(candles: &[Candle]) -> Option<FibonacciReading> {
    calculate_fibonacci(candles, 50)
}
