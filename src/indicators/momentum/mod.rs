//! Momentum indicators: RSI, MACD, Stochastic, Stochastic RSI

pub mod macd;
pub mod rsi;
pub mod stoch_rsi;
pub mod stochastic;

pub use macd::*;
pub use rsi::*;
pub use stoch_rsi::*;
pub use stochastic::*;
