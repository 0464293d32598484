//! Indicator computation errors.

use thiserror::Error;

/// Why an indicator could not produce a reading.
///
/// These stay request-local: `analyze` reports them per indicator inside a
/// successful response, and `predict` absorbs them as neutral signals.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IndicatorError {
    #[error("unsupported indicator: {0}")]
    Unsupported(String),

    #[error("invalid parameters for {indicator}: {reason}")]
    InvalidParameters {
        indicator: &'static str,
        reason: String,
    },

    #[error("{indicator} needs at least {required} candles, got {provided}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        provided: usize,
    },
}
