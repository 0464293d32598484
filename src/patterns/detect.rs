//! Detection geometry for the pattern catalogue.
//!
//! Each pattern is an independent predicate over a window of one to three
//! candles, so a dragonfly doji also registers as a plain doji. Trend
//! context compares the close against the close five candles back with
//! a 2% band. A match yields an occurrence magnitude in (0, 1], graded
//! by how cleanly the geometry holds.

use crate::models::candle::Candle;
use crate::models::pattern::{PatternOccurrence, PatternResult};

use super::catalogue::PatternKind;

const DOJI_BODY_RATIO: f64 = 0.1;
const DOMINANT_SHADOW_RATIO: f64 = 0.6;
const MINOR_SHADOW_RATIO: f64 = 0.1;
const LEGGED_SHADOW_RATIO: f64 = 0.3;
const MARUBOZU_BODY_RATIO: f64 = 0.95;
const TREND_PERIOD: usize = 5;
const TREND_BAND: f64 = 0.02;

/// A catalogue pattern paired with its detection outcome for a series.
#[derive(Debug, Clone)]
pub struct PatternDetection {
    pub kind: PatternKind,
    pub result: PatternResult,
}

/// Scan a series against the full catalogue.
pub fn detect_patterns(candles: &[Candle]) -> Vec<PatternDetection> {
    PatternKind::ALL
        .iter()
        .map(|&kind| PatternDetection {
            kind,
            result: detect_one(kind, candles),
        })
        .collect()
}

fn detect_one(kind: PatternKind, candles: &[Candle]) -> PatternResult {
    let mut occurrences = Vec::new();

    for index in (kind.window() - 1)..candles.len() {
        if let Some(magnitude) = magnitude_at(kind, candles, index) {
            occurrences.push(PatternOccurrence {
                timestamp: candles[index].timestamp,
                direction: kind.bias(),
                magnitude,
            });
        }
    }

    if occurrences.is_empty() {
        PatternResult::NotDetected
    } else {
        PatternResult::Detected {
            direction: kind.bias(),
            occurrence_count: occurrences.len(),
            occurrences,
        }
    }
}

/// Magnitude of `kind` completing at `index`, if its geometry holds there.
fn magnitude_at(kind: PatternKind, candles: &[Candle], index: usize) -> Option<f64> {
    let current = &candles[index];
    match kind {
        PatternKind::Doji => doji(current),
        PatternKind::DragonflyDoji => dragonfly_doji(current),
        PatternKind::GravestoneDoji => gravestone_doji(current),
        PatternKind::LongLeggedDoji => long_legged_doji(current),
        PatternKind::FourPriceDoji => four_price_doji(current),
        PatternKind::SpinningTop => spinning_top(current),
        PatternKind::Hammer => hammer_shape(current).filter(|_| trend_at(candles, index) < 0),
        PatternKind::HangingMan => hammer_shape(current).filter(|_| trend_at(candles, index) > 0),
        PatternKind::InvertedHammer => {
            inverted_hammer_shape(current).filter(|_| trend_at(candles, index) < 0)
        }
        PatternKind::ShootingStar => {
            inverted_hammer_shape(current).filter(|_| trend_at(candles, index) > 0)
        }
        PatternKind::BullishMarubozu => marubozu(current).filter(|_| current.is_bullish()),
        PatternKind::BearishMarubozu => marubozu(current).filter(|_| current.is_bearish()),
        PatternKind::BullishEngulfing => {
            bullish_engulfing(&candles[index - 1], current, trend_at(candles, index))
        }
        PatternKind::BearishEngulfing => {
            bearish_engulfing(&candles[index - 1], current, trend_at(candles, index))
        }
        PatternKind::BullishHarami => {
            bullish_harami(&candles[index - 1], current, trend_at(candles, index))
        }
        PatternKind::BearishHarami => {
            bearish_harami(&candles[index - 1], current, trend_at(candles, index))
        }
        PatternKind::PiercingLine => {
            piercing_line(&candles[index - 1], current, trend_at(candles, index))
        }
        PatternKind::DarkCloudCover => {
            dark_cloud_cover(&candles[index - 1], current, trend_at(candles, index))
        }
        PatternKind::MorningStar => {
            morning_star(&candles[index - 2], &candles[index - 1], current)
        }
        PatternKind::EveningStar => {
            evening_star(&candles[index - 2], &candles[index - 1], current)
        }
        PatternKind::ThreeWhiteSoldiers => {
            three_white_soldiers(&candles[index - 2], &candles[index - 1], current)
        }
        PatternKind::ThreeBlackCrows => {
            three_black_crows(&candles[index - 2], &candles[index - 1], current)
        }
    }
}

/// Prior trend at `index`: 1 up, -1 down, 0 flat or not enough history.
fn trend_at(candles: &[Candle], index: usize) -> i32 {
    if index < TREND_PERIOD {
        return 0;
    }
    let past = candles[index - TREND_PERIOD].close;
    if past <= 0.0 {
        return 0;
    }
    let current = candles[index].close;
    if current > past * (1.0 + TREND_BAND) {
        1
    } else if current < past * (1.0 - TREND_BAND) {
        -1
    } else {
        0
    }
}

fn midpoint(candle: &Candle) -> f64 {
    (candle.open + candle.close) / 2.0
}

fn doji(candle: &Candle) -> Option<f64> {
    let range = candle.range();
    if range <= 0.0 {
        // All four prices equal collapses to a maximal doji.
        return (candle.high == candle.low).then_some(1.0);
    }
    let body_ratio = candle.body() / range;
    (body_ratio <= DOJI_BODY_RATIO).then(|| 1.0 - body_ratio / DOJI_BODY_RATIO * 0.5)
}

fn dragonfly_doji(candle: &Candle) -> Option<f64> {
    let range = candle.range();
    if range <= 0.0 {
        return None;
    }
    doji(candle)?;
    let lower = candle.lower_shadow() / range;
    let upper = candle.upper_shadow() / range;
    (lower >= DOMINANT_SHADOW_RATIO && upper <= MINOR_SHADOW_RATIO)
        .then(|| (0.7 + lower * 0.3).min(1.0))
}

fn gravestone_doji(candle: &Candle) -> Option<f64> {
    let range = candle.range();
    if range <= 0.0 {
        return None;
    }
    doji(candle)?;
    let lower = candle.lower_shadow() / range;
    let upper = candle.upper_shadow() / range;
    (upper >= DOMINANT_SHADOW_RATIO && lower <= MINOR_SHADOW_RATIO)
        .then(|| (0.7 + upper * 0.3).min(1.0))
}

fn long_legged_doji(candle: &Candle) -> Option<f64> {
    let range = candle.range();
    if range <= 0.0 {
        return None;
    }
    doji(candle)?;
    let lower = candle.lower_shadow() / range;
    let upper = candle.upper_shadow() / range;
    (lower >= LEGGED_SHADOW_RATIO && upper >= LEGGED_SHADOW_RATIO)
        .then(|| (0.6 + (lower + upper) * 0.3).min(1.0))
}

fn four_price_doji(candle: &Candle) -> Option<f64> {
    (candle.high == candle.low).then_some(1.0)
}

fn spinning_top(candle: &Candle) -> Option<f64> {
    let range = candle.range();
    if range <= 0.0 {
        return None;
    }
    let body = candle.body();
    let body_ratio = body / range;
    let small_body = body_ratio > DOJI_BODY_RATIO && body <= range / 3.0;
    let both_wicks = candle.upper_shadow() >= body && candle.lower_shadow() >= body;
    (small_body && both_wicks).then(|| (0.4 + (range - body) / range * 0.4).min(1.0))
}

/// Long lower shadow, minimal upper shadow. Hammer in a downtrend,
/// hanging man in an uptrend.
fn hammer_shape(candle: &Candle) -> Option<f64> {
    let body = candle.body();
    if body <= 0.0 {
        return None;
    }
    let lower = candle.lower_shadow();
    let upper = candle.upper_shadow();
    (lower >= body * 2.0 && upper <= body * 0.5).then(|| {
        let mut magnitude = 0.7;
        if lower >= body * 3.0 {
            magnitude += 0.1;
        }
        magnitude
    })
}

/// Long upper shadow, minimal lower shadow. Inverted hammer in a
/// downtrend, shooting star in an uptrend.
fn inverted_hammer_shape(candle: &Candle) -> Option<f64> {
    let body = candle.body();
    if body <= 0.0 {
        return None;
    }
    let lower = candle.lower_shadow();
    let upper = candle.upper_shadow();
    (upper >= body * 2.0 && lower <= body * 0.5).then(|| {
        let mut magnitude = 0.6;
        if upper >= body * 3.0 {
            magnitude += 0.1;
        }
        magnitude
    })
}

fn marubozu(candle: &Candle) -> Option<f64> {
    let range = candle.range();
    if range <= 0.0 {
        return None;
    }
    let body_ratio = candle.body() / range;
    (body_ratio >= MARUBOZU_BODY_RATIO).then_some(body_ratio)
}

fn bullish_engulfing(prev: &Candle, current: &Candle, trend: i32) -> Option<f64> {
    let engulfs = prev.is_bearish()
        && current.is_bullish()
        && current.open < prev.close
        && current.close > prev.open;
    engulfs.then(|| {
        let mut magnitude: f64 = 0.8;
        if trend < 0 {
            magnitude += 0.15;
        }
        if prev.body() > 0.0 && current.body() > prev.body() * 1.5 {
            magnitude += 0.05;
        }
        magnitude.min(1.0)
    })
}

fn bearish_engulfing(prev: &Candle, current: &Candle, trend: i32) -> Option<f64> {
    let engulfs = prev.is_bullish()
        && current.is_bearish()
        && current.open > prev.close
        && current.close < prev.open;
    engulfs.then(|| {
        let mut magnitude: f64 = 0.8;
        if trend > 0 {
            magnitude += 0.15;
        }
        if prev.body() > 0.0 && current.body() > prev.body() * 1.5 {
            magnitude += 0.05;
        }
        magnitude.min(1.0)
    })
}

fn bullish_harami(prev: &Candle, current: &Candle, trend: i32) -> Option<f64> {
    let inside = prev.is_bearish()
        && current.is_bullish()
        && current.open > prev.close
        && current.close < prev.open
        && prev.body() > current.body();
    inside.then(|| {
        let mut magnitude: f64 = 0.6;
        if trend < 0 {
            magnitude += 0.15;
        }
        if prev.body() > current.body() * 2.0 {
            magnitude += 0.05;
        }
        magnitude.min(1.0)
    })
}

fn bearish_harami(prev: &Candle, current: &Candle, trend: i32) -> Option<f64> {
    let inside = prev.is_bullish()
        && current.is_bearish()
        && current.close > prev.open
        && current.open < prev.close
        && prev.body() > current.body();
    inside.then(|| {
        let mut magnitude: f64 = 0.6;
        if trend > 0 {
            magnitude += 0.15;
        }
        if prev.body() > current.body() * 2.0 {
            magnitude += 0.05;
        }
        magnitude.min(1.0)
    })
}

fn piercing_line(prev: &Candle, current: &Candle, trend: i32) -> Option<f64> {
    let pierces = prev.is_bearish()
        && current.is_bullish()
        && current.open <= prev.close
        && current.close > midpoint(prev)
        && current.close < prev.open;
    pierces.then(|| {
        let mut magnitude = 0.7;
        if trend < 0 {
            magnitude += 0.1;
        }
        magnitude
    })
}

fn dark_cloud_cover(prev: &Candle, current: &Candle, trend: i32) -> Option<f64> {
    let covers = prev.is_bullish()
        && current.is_bearish()
        && current.open >= prev.close
        && current.close < midpoint(prev)
        && current.close > prev.open;
    covers.then(|| {
        let mut magnitude = 0.7;
        if trend > 0 {
            magnitude += 0.1;
        }
        magnitude
    })
}

fn morning_star(first: &Candle, star: &Candle, third: &Candle) -> Option<f64> {
    let shapes = first.is_bearish()
        && first.body() > 0.0
        && star.body() <= first.body() * 0.3
        && star.open.max(star.close) < first.close
        && third.is_bullish()
        && third.close > midpoint(first);
    shapes.then(|| {
        let mut magnitude = 0.8;
        if third.close > first.open {
            magnitude += 0.1;
        }
        magnitude
    })
}

fn evening_star(first: &Candle, star: &Candle, third: &Candle) -> Option<f64> {
    let shapes = first.is_bullish()
        && first.body() > 0.0
        && star.body() <= first.body() * 0.3
        && star.open.min(star.close) > first.close
        && third.is_bearish()
        && third.close < midpoint(first);
    shapes.then(|| {
        let mut magnitude = 0.8;
        if third.close < first.open {
            magnitude += 0.1;
        }
        magnitude
    })
}

fn soldier(candle: &Candle) -> bool {
    candle.is_bullish() && candle.upper_shadow() <= candle.body() * 0.3
}

fn crow(candle: &Candle) -> bool {
    candle.is_bearish() && candle.lower_shadow() <= candle.body() * 0.3
}

fn three_white_soldiers(first: &Candle, second: &Candle, third: &Candle) -> Option<f64> {
    let marching = soldier(first)
        && soldier(second)
        && soldier(third)
        && second.close > first.close
        && third.close > second.close
        && second.open > first.open
        && second.open < first.close
        && third.open > second.open
        && third.open < second.close;
    marching.then_some(0.85)
}

fn three_black_crows(first: &Candle, second: &Candle, third: &Candle) -> Option<f64> {
    let marching = crow(first)
        && crow(second)
        && crow(third)
        && second.close < first.close
        && third.close < second.close
        && second.open < first.open
        && second.open > first.close
        && third.open < second.open
        && third.open > second.close;
    marching.then_some(0.85)
}
