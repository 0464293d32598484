//! Risk tier and market-condition assessment.

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::prediction::{
    MarketConditions, MomentumState, RiskTier, TrendState, VolatilityTier, VolumeTrend,
};

const VOLUME_WINDOW: usize = 10;
const MOMENTUM_SPAN: usize = 5;

/// Classify prediction risk from close volatility and volume consistency.
pub fn assess_risk(candles: &[Candle], confidence: f64) -> RiskTier {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let volatility = math::sample_std_dev(&math::pct_changes(&closes));
    let volume_cv = volume_consistency(candles);

    classify_risk(confidence, volatility, volume_cv)
}

fn classify_risk(
    confidence: f64,
    volatility: Option<f64>,
    volume_cv: Option<f64>,
) -> RiskTier {
    let vol_below = |limit: f64| volatility.is_some_and(|v| v < limit);

    if confidence > 0.8 && vol_below(0.02) && volume_cv.is_some_and(|cv| cv < 1.0) {
        RiskTier::Low
    } else if confidence > 0.6 && vol_below(0.05) {
        RiskTier::Medium
    } else if volatility.is_some_and(|v| v > 0.08) || volume_cv.is_some_and(|cv| cv > 2.0) {
        RiskTier::High
    } else {
        RiskTier::Medium
    }
}

/// Coefficient of variation of the last ten volumes.
fn volume_consistency(candles: &[Candle]) -> Option<f64> {
    let start = candles.len().saturating_sub(VOLUME_WINDOW);
    let volumes: Vec<f64> = candles[start..].iter().map(|c| c.volume).collect();

    let avg = math::mean(&volumes)?;
    if avg <= 0.0 {
        return None;
    }
    Some(math::sample_std_dev(&volumes)? / avg)
}

/// Trend, volatility, volume, and momentum context for a series.
pub fn market_conditions(candles: &[Candle]) -> MarketConditions {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    MarketConditions {
        trend: trend_state(&closes),
        volatility: volatility_tier(&closes),
        volume: volume_trend(candles),
        momentum: momentum_state(&closes),
    }
}

/// Short EMA against long EMA of the closes.
fn trend_state(closes: &[f64]) -> TrendState {
    let short = math::ema_series(closes, 10).last().copied();
    let long = math::ema_series(closes, 20).last().copied();

    match (short, long) {
        (Some(short), Some(long)) if short > long => TrendState::Bullish,
        (Some(short), Some(long)) if short < long => TrendState::Bearish,
        _ => TrendState::Sideways,
    }
}

/// Sample deviation of the last ten close-to-close returns.
fn volatility_tier(closes: &[f64]) -> VolatilityTier {
    let returns = math::pct_changes(closes);
    let start = returns.len().saturating_sub(10);
    match math::sample_std_dev(&returns[start..]) {
        Some(v) if v >= 0.05 => VolatilityTier::High,
        Some(v) if v >= 0.02 => VolatilityTier::Medium,
        _ => VolatilityTier::Low,
    }
}

/// Mean of the last three volumes against the ten-volume average, 20% bands.
fn volume_trend(candles: &[Candle]) -> VolumeTrend {
    if candles.len() < VOLUME_WINDOW {
        return VolumeTrend::Stable;
    }

    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let Some(baseline) = math::sma(&volumes, VOLUME_WINDOW) else {
        return VolumeTrend::Stable;
    };
    let Some(recent) = math::sma(&volumes, 3) else {
        return VolumeTrend::Stable;
    };

    if recent > baseline * 1.2 {
        VolumeTrend::Increasing
    } else if recent < baseline * 0.8 {
        VolumeTrend::Decreasing
    } else {
        VolumeTrend::Stable
    }
}

/// Close change across the last five candles, ±0.5% and ±2% bands.
fn momentum_state(closes: &[f64]) -> MomentumState {
    if closes.len() < MOMENTUM_SPAN {
        return MomentumState::Neutral;
    }
    let past = closes[closes.len() - MOMENTUM_SPAN];
    if past == 0.0 {
        return MomentumState::Neutral;
    }
    let change = (closes[closes.len() - 1] - past) / past;

    if change > 0.02 {
        MomentumState::StrongBullish
    } else if change > 0.005 {
        MomentumState::Bullish
    } else if change < -0.02 {
        MomentumState::StrongBearish
    } else if change < -0.005 {
        MomentumState::Bearish
    } else {
        MomentumState::Neutral
    }
}
