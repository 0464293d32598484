//! Binarix: technical-analysis prediction engine.
//!
//! Computes indicator readings, candlestick-pattern signals and a heuristic
//! directional prediction (call / put / neutral) from OHLCV candle series,
//! served over a small HTTP API. The engine itself is pure and synchronous;
//! all I/O lives at the HTTP boundary.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod patterns;
pub mod signals;
