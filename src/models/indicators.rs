//! Typed indicator readings returned by the engine.
//!
//! Each indicator has its own reading struct; [`IndicatorReading`] is the
//! closed union over them, serialized untagged so every reading lands as a
//! flat JSON object with the indicator's conventional field names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Price relative to a reference level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePosition {
    Above,
    Below,
}

/// Directional lean reported by an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendBias {
    Bullish,
    Bearish,
}

/// One indicator request: external name plus positional parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorRequest {
    pub name: String,
    #[serde(default)]
    pub params: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiReading {
    pub rsi: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdReading {
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaReading {
    pub sma: f64,
}

/// One value per requested period, keyed `ema_{period}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaReading {
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl EmaReading {
    pub fn value_for(&self, period: u32) -> Option<f64> {
        self.values.get(&format!("ema_{}", period)).copied()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerReading {
    pub bb_upper: f64,
    pub bb_middle: f64,
    pub bb_lower: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochasticReading {
    pub stoch_k: f64,
    pub stoch_d: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochRsiReading {
    pub stoch_rsi_k: f64,
    pub stoch_rsi_d: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtrReading {
    pub atr: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VwapReading {
    pub vwap: f64,
    pub price_vs_vwap: PricePosition,
    /// Signed distance from VWAP, in percent of VWAP.
    pub vwap_distance_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObvReading {
    pub obv: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obv_trend: Option<TrendBias>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeMaReading {
    pub volume_ma: f64,
    pub current_volume: f64,
    /// Current volume as a multiple of the moving average.
    pub volume_ratio: f64,
    pub volume_level: VolumeLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLevel {
    High,
    Normal,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuperTrendReading {
    pub supertrend_value: f64,
    pub supertrend_direction: TrendBias,
    pub price_vs_supertrend: PricePosition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FibonacciReading {
    pub window_high: f64,
    pub window_low: f64,
    pub fib_0: f64,
    pub fib_236: f64,
    pub fib_382: f64,
    pub fib_500: f64,
    pub fib_618: f64,
    pub fib_786: f64,
    pub fib_100: f64,
    pub nearest_level: String,
    pub distance_to_level_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: f64,
    pub touches: usize,
    /// Touch-count score normalized to (0, 1].
    pub strength: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportResistanceReading {
    pub current_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_support: Option<PriceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_resistance: Option<PriceLevel>,
    pub support_levels: Vec<PriceLevel>,
    pub resistance_levels: Vec<PriceLevel>,
}

/// Closed union over every reading the engine can produce.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum IndicatorReading {
    Rsi(RsiReading),
    Macd(MacdReading),
    Sma(SmaReading),
    Ema(EmaReading),
    Bollinger(BollingerReading),
    Stochastic(StochasticReading),
    StochRsi(StochRsiReading),
    Atr(AtrReading),
    Vwap(VwapReading),
    Obv(ObvReading),
    VolumeMa(VolumeMaReading),
    SuperTrend(SuperTrendReading),
    Fibonacci(FibonacciReading),
    SupportResistance(SupportResistanceReading),
}
