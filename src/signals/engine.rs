//! Prediction engine: a fixed indicator plan plus the pattern aggregate,
//! folded into one weighted decision.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::indicators::IndicatorKind;
use crate::models::candle::Candle;
use crate::models::indicators::{IndicatorReading, IndicatorRequest};
use crate::models::prediction::{
    PredictionDirection, PredictionResult, Signal, SignalBreakdown, SignalDirection,
};
use crate::patterns::{self, PatternSection};
use crate::signals::{entry, interpreter, risk};

/// Minimum candles a prediction needs.
pub const MIN_CANDLES: usize = 30;
/// Weight ratio one side must exceed to win the call.
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.6;
/// Directional confidence never exceeds this.
pub const CONFIDENCE_CAP: f64 = 0.95;
/// Horizon reported when the request leaves it out.
pub const DEFAULT_TIMEFRAME_MINUTES: u32 = 5;

/// Indicators every prediction evaluates, with fixed parameters.
const PREDICTION_PLAN: [(IndicatorKind, &[f64]); 9] = [
    (IndicatorKind::Rsi, &[14.0]),
    (IndicatorKind::Macd, &[12.0, 26.0, 9.0]),
    (IndicatorKind::Ema, &[20.0]),
    (IndicatorKind::BollingerBands, &[20.0, 2.0]),
    (IndicatorKind::Stochastic, &[14.0, 3.0, 3.0]),
    (IndicatorKind::Atr, &[14.0]),
    (IndicatorKind::StochRsi, &[14.0, 14.0, 3.0]),
    (IndicatorKind::Vwap, &[]),
    (IndicatorKind::SuperTrend, &[10.0, 3.0]),
];

/// Per-call tunables.
#[derive(Debug, Clone, Copy)]
pub struct PredictOptions {
    pub timeframe_minutes: u32,
    pub decision_threshold: f64,
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self {
            timeframe_minutes: DEFAULT_TIMEFRAME_MINUTES,
            decision_threshold: DEFAULT_DECISION_THRESHOLD,
        }
    }
}

/// Outcome of one requested indicator in a batch analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum IndicatorOutcome {
    Reading(IndicatorReading),
    Failed { error: String },
}

/// Batch analysis output: one outcome per requested name, plus the
/// pattern block when asked for.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub results: BTreeMap<String, IndicatorOutcome>,
    pub patterns: Option<PatternSection>,
}

pub struct PredictionEngine;

impl PredictionEngine {
    /// Run the full prediction pipeline over a series.
    ///
    /// Indicators that cannot be computed vote neutral with weight 0 and
    /// stay visible in the detailed signal list.
    pub fn predict(candles: &[Candle], options: &PredictOptions) -> PredictionResult {
        let Some(last) = candles.last() else {
            return PredictionResult::inconclusive(
                options.timeframe_minutes,
                "empty candle series",
            );
        };
        let price = last.close;

        let mut signals = Vec::with_capacity(PREDICTION_PLAN.len() + 1);
        for (kind, params) in PREDICTION_PLAN {
            match kind.compute(candles, params) {
                Ok(reading) => signals.push(interpreter::interpret(kind, &reading, price)),
                Err(err) => {
                    warn!(
                        indicator = kind.name(),
                        error = %err,
                        "indicator unavailable for prediction"
                    );
                    signals.push(Signal::neutral(kind.name(), format!("unavailable: {err}")));
                }
            }
        }

        let detections = patterns::detect_patterns(candles);
        let aggregate = patterns::aggregate_patterns(&detections);
        signals.push(interpreter::pattern_signal(&aggregate));

        let breakdown = fold_signals(&signals);
        let (direction, confidence) = decide(&breakdown, options.decision_threshold);

        let risk_tier = risk::assess_risk(candles, confidence);
        let market_conditions = risk::market_conditions(candles);
        let entry_suggestion = entry::suggest_entry(candles, direction, confidence, risk_tier);

        PredictionResult {
            direction,
            confidence,
            timeframe_minutes: options.timeframe_minutes,
            risk_tier,
            signal_breakdown: breakdown,
            detailed_signals: signals,
            market_conditions,
            entry_suggestion,
            error: None,
        }
    }

    /// Compute each requested indicator, turning failures into per-entry
    /// errors instead of failing the batch.
    pub fn analyze(
        candles: &[Candle],
        requests: &[IndicatorRequest],
        include_patterns: bool,
    ) -> AnalysisReport {
        let mut results = BTreeMap::new();

        for request in requests {
            let outcome = IndicatorKind::resolve(&request.name)
                .and_then(|kind| kind.compute(candles, &request.params));
            let outcome = match outcome {
                Ok(reading) => IndicatorOutcome::Reading(reading),
                Err(err) => {
                    warn!(indicator = %request.name, error = %err, "indicator failed in analysis");
                    IndicatorOutcome::Failed {
                        error: err.to_string(),
                    }
                }
            };
            results.insert(request.name.clone(), outcome);
        }

        let patterns = include_patterns.then(|| patterns::pattern_section(candles));

        AnalysisReport { results, patterns }
    }
}

fn fold_signals(signals: &[Signal]) -> SignalBreakdown {
    let mut breakdown = SignalBreakdown::default();

    for signal in signals {
        match signal.direction {
            SignalDirection::Bullish => {
                breakdown.bullish_count += 1;
                breakdown.bullish_weight += signal.weight;
            }
            SignalDirection::Bearish => {
                breakdown.bearish_count += 1;
                breakdown.bearish_weight += signal.weight;
            }
            SignalDirection::Neutral => breakdown.neutral_count += 1,
        }
        breakdown.total_weight += signal.weight;
    }

    if breakdown.total_weight > 0.0 {
        breakdown.bullish_ratio = breakdown.bullish_weight / breakdown.total_weight;
        breakdown.bearish_ratio = breakdown.bearish_weight / breakdown.total_weight;
    }

    breakdown
}

fn decide(breakdown: &SignalBreakdown, threshold: f64) -> (PredictionDirection, f64) {
    if breakdown.total_weight <= 0.0 {
        return (PredictionDirection::Neutral, 0.0);
    }

    if breakdown.bullish_ratio > threshold {
        (
            PredictionDirection::Call,
            breakdown.bullish_ratio.min(CONFIDENCE_CAP),
        )
    } else if breakdown.bearish_ratio > threshold {
        (
            PredictionDirection::Put,
            breakdown.bearish_ratio.min(CONFIDENCE_CAP),
        )
    } else {
        let spread = (breakdown.bullish_ratio - breakdown.bearish_ratio).abs();
        (PredictionDirection::Neutral, 1.0 - spread)
    }
}
