//! Market structure indicators: SuperTrend, Fibonacci, support/resistance

pub mod fibonacci;
pub mod supertrend;
pub mod support_resistance;

pub use fibonacci::*;
pub use supertrend::*;
pub use support_resistance::*;
