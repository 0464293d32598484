//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod pattern;
pub mod prediction;

pub use candle::{parse_series, Candle, MarketInfo, RawCandle, DEFAULT_VOLUME};
pub use indicators::{IndicatorReading, IndicatorRequest, PricePosition, TrendBias};
pub use pattern::{
    PatternAggregate, PatternDirection, PatternOccurrence, PatternResult, RecentOccurrence,
    SignalStrength,
};
pub use prediction::{
    EntrySuggestion, EntryTiming, MarketConditions, MomentumState, PositionSize,
    PredictionDirection, PredictionResult, RiskTier, Signal, SignalBreakdown, SignalDirection,
    TrendState, VolatilityTier, VolumeTrend,
};
