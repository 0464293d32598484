//! Technical indicators, grouped by category.

pub mod error;
pub mod momentum;
pub mod registry;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use error::IndicatorError;
pub use registry::{IndicatorCategory, IndicatorKind};
