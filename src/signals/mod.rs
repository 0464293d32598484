//! Signal interpretation and the prediction pipeline.

pub mod engine;
pub mod entry;
pub mod interpreter;
pub mod risk;

pub use engine::{
    AnalysisReport, IndicatorOutcome, PredictOptions, PredictionEngine, CONFIDENCE_CAP,
    DEFAULT_DECISION_THRESHOLD, DEFAULT_TIMEFRAME_MINUTES, MIN_CANDLES,
};
pub use interpreter::{interpret, pattern_signal};
