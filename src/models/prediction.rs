//! Prediction output model: signals, breakdown, market context, suggestion.

use serde::{Deserialize, Serialize};

/// Direction of an individual signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// One weighted vote from an indicator or the pattern aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct Signal {
    pub source: String,
    pub direction: SignalDirection,
    pub weight: f64,
    pub reason: String,
}

impl Signal {
    pub fn new(
        source: impl Into<String>,
        direction: SignalDirection,
        weight: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            direction,
            weight,
            reason: reason.into(),
        }
    }

    /// Weight-0 neutral signal; used for rule-table misses and absorbed
    /// indicator failures.
    pub fn neutral(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(source, SignalDirection::Neutral, 0.0, reason)
    }
}

/// Final call of the prediction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionDirection {
    Call,
    Put,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Counts and weight totals after folding all signals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalBreakdown {
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub neutral_count: usize,
    pub bullish_weight: f64,
    pub bearish_weight: f64,
    pub total_weight: f64,
    pub bullish_ratio: f64,
    pub bearish_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendState {
    Bullish,
    Bearish,
    Sideways,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityTier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeTrend {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumState {
    StrongBullish,
    Bullish,
    Neutral,
    Bearish,
    StrongBearish,
}

/// Coarse market context computed alongside a prediction.
#[derive(Debug, Clone, Serialize)]
pub struct MarketConditions {
    pub trend: TrendState,
    pub volatility: VolatilityTier,
    pub volume: VolumeTrend,
    pub momentum: MomentumState,
}

impl Default for MarketConditions {
    fn default() -> Self {
        Self {
            trend: TrendState::Sideways,
            volatility: VolatilityTier::Medium,
            volume: VolumeTrend::Stable,
            momentum: MomentumState::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryTiming {
    Immediate,
    WaitForConfirmation,
    Avoid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionSize {
    Small,
    Normal,
}

/// Structured entry advice attached to a directional prediction.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySuggestion {
    pub entry_timing: EntryTiming,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_size: Option<PositionSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_timeframes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Full prediction envelope.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub direction: PredictionDirection,
    pub confidence: f64,
    pub timeframe_minutes: u32,
    pub risk_tier: RiskTier,
    pub signal_breakdown: SignalBreakdown,
    pub detailed_signals: Vec<Signal>,
    pub market_conditions: MarketConditions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_suggestion: Option<EntrySuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    /// Neutral zero-confidence result carrying a diagnostic note.
    ///
    /// The engine falls back to this instead of failing the request when a
    /// series turns out to be unusable.
    pub fn inconclusive(timeframe_minutes: u32, note: impl Into<String>) -> Self {
        Self {
            direction: PredictionDirection::Neutral,
            confidence: 0.0,
            timeframe_minutes,
            risk_tier: RiskTier::Medium,
            signal_breakdown: SignalBreakdown::default(),
            detailed_signals: Vec::new(),
            market_conditions: MarketConditions::default(),
            entry_suggestion: None,
            error: Some(note.into()),
        }
    }
}
