//! Candlestick pattern detection and aggregation.

pub mod aggregate;
pub mod catalogue;
pub mod detect;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::candle::Candle;
use crate::models::pattern::{PatternAggregate, PatternResult};

pub use aggregate::aggregate_patterns;
pub use catalogue::PatternKind;
pub use detect::{detect_patterns, PatternDetection};

/// Pattern block of an analysis response: every catalogue pattern with its
/// detection status, interpretations for the detected ones, and the
/// aggregate signal.
#[derive(Debug, Clone, Serialize)]
pub struct PatternSection {
    pub detected_patterns: BTreeMap<&'static str, PatternResult>,
    pub interpretations: BTreeMap<&'static str, &'static str>,
    pub signals: PatternAggregate,
}

/// Run detection and aggregation over a series.
pub fn pattern_section(candles: &[Candle]) -> PatternSection {
    let detections = detect_patterns(candles);
    let signals = aggregate_patterns(&detections);

    let mut detected_patterns = BTreeMap::new();
    let mut interpretations = BTreeMap::new();
    for detection in detections {
        if detection.result.is_detected() {
            interpretations.insert(detection.kind.name(), detection.kind.interpretation());
        }
        detected_patterns.insert(detection.kind.name(), detection.result);
    }

    PatternSection {
        detected_patterns,
        interpretations,
        signals,
    }
}
