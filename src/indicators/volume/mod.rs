//! Volume indicators: VWAP, OBV, volume MA

pub mod obv;
pub mod volume_ma;
pub mod vwap;

pub use obv::*;
pub use volume_ma::*;
pub use vwap::*;
