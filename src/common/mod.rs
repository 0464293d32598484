//! Shared numeric primitives used across the engine.

pub mod math;
