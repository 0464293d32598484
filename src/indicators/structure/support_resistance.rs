//! Support and Resistance levels detection

use crate::models::candle::Candle;
use crate::models::indicators::{PriceLevel, SupportResistanceReading};

/// Price gap within which two pivots count as touches of the same level.
const CLUSTER_TOLERANCE: f64 = 0.005;

/// Calculate support and resistance levels
///
/// Finds pivot highs and lows within the lookback window (two candles of
/// confirmation on each side), clusters pivots within 0.5% into levels and
/// counts touches. Levels below the current price are support, above are
/// resistance.
pub fn calculate_support_resistance(
    candles: &[Candle],
    lookback: u32,
) -> Option<SupportResistanceReading> {
    let lookback = lookback as usize;
    if lookback < 5 || candles.len() < lookback {
        return None;
    }

    let window = &candles[candles.len() - lookback..];
    let current_price = candles.last()?.close;

    let mut pivot_highs = Vec::new();
    let mut pivot_lows = Vec::new();
    for i in 2..window.len() - 2 {
        let high = window[i].high;
        if (i - 2..=i + 2).all(|j| window[j].high <= high) {
            pivot_highs.push(high);
        }
        let low = window[i].low;
        if (i - 2..=i + 2).all(|j| window[j].low >= low) {
            pivot_lows.push(low);
        }
    }

    let mut support_levels = Vec::new();
    let mut resistance_levels = Vec::new();
    for level in cluster_levels(pivot_highs)
        .into_iter()
        .chain(cluster_levels(pivot_lows))
    {
        if level.price < current_price {
            support_levels.push(level);
        } else if level.price > current_price {
            resistance_levels.push(level);
        }
    }

    // Nearest level first
    support_levels.sort_by(|a, b| b.price.total_cmp(&a.price));
    resistance_levels.sort_by(|a, b| a.price.total_cmp(&b.price));

    Some(SupportResistanceReading {
        current_price,
        nearest_support: support_levels.first().cloned(),
        nearest_resistance: resistance_levels.first().cloned(),
        support_levels,
        resistance_levels,
    })
}

/// Calculate support/resistance with the default lookback (20)
pub fn calculate_support_resistance_default(
    candles: &[Candle],
) -> Option<SupportResistanceReading> {
    calculate_support_resistance(candles, 20)
}

fn cluster_levels(mut pivots: Vec<f64>) -> Vec<PriceLevel> {
    pivots.sort_by(f64::total_cmp);

    let mut levels = Vec::new();
    let mut cluster: Vec<f64> = Vec::new();

    for pivot in pivots {
        let belongs = cluster.last().is_some_and(|&last| {
            last != 0.0 && ((pivot - last) / last).abs() <= CLUSTER_TOLERANCE
        });

        if belongs || cluster.is_empty() {
            cluster.push(pivot);
        } else {
            levels.push(level_from(&cluster));
            cluster = vec![pivot];
        }
    }
    if !cluster.is_empty() {
        levels.push(level_from(&cluster));
    }

    levels
}

fn level_from(cluster: &[f64]) -> PriceLevel {
    let price = cluster.iter().sum::<f64>() / cluster.len() as f64;
    let touches = cluster.len();
    PriceLevel {
        price,
        touches,
        strength: (touches as f64 / 5.0).min(1.0),
    }
}
