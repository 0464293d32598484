//! Candlestick pattern results and aggregate signal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directional meaning of a pattern detection.
///
/// `Neutral` is the normalized form of the legacy plain-string "Neutral"
/// label carried by indecision patterns (doji family, spinning top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// One detected instance of a pattern within a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternOccurrence {
    pub timestamp: DateTime<Utc>,
    pub direction: PatternDirection,
    /// Detection quality in (0, 1].
    pub magnitude: f64,
}

/// Detection outcome for a single pattern name.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatternResult {
    NotDetected,
    Detected {
        direction: PatternDirection,
        occurrence_count: usize,
        occurrences: Vec<PatternOccurrence>,
    },
}

impl PatternResult {
    pub fn is_detected(&self) -> bool {
        matches!(self, PatternResult::Detected { .. })
    }
}

/// Strength of the aggregate pattern signal, by detected-pattern count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStrength {
    Strong,
    Moderate,
    Weak,
}

/// Occurrence flattened with its pattern name for recency listings.
#[derive(Debug, Clone, Serialize)]
pub struct RecentOccurrence {
    pub pattern: &'static str,
    pub timestamp: DateTime<Utc>,
    pub direction: PatternDirection,
    pub magnitude: f64,
}

/// Aggregate view over all detections in a series.
#[derive(Debug, Clone, Serialize)]
pub struct PatternAggregate {
    pub overall_signal: PatternDirection,
    pub strength: SignalStrength,
    pub detected_patterns: Vec<&'static str>,
    pub bullish_patterns: Vec<&'static str>,
    pub bearish_patterns: Vec<&'static str>,
    pub neutral_patterns: Vec<&'static str>,
    pub recent_occurrences: Vec<RecentOccurrence>,
}

impl PatternAggregate {
    /// Aggregate for a series with no detections.
    pub fn empty() -> Self {
        Self {
            overall_signal: PatternDirection::Neutral,
            strength: SignalStrength::Weak,
            detected_patterns: Vec::new(),
            bullish_patterns: Vec::new(),
            bearish_patterns: Vec::new(),
            neutral_patterns: Vec::new(),
            recent_occurrences: Vec::new(),
        }
    }
}
