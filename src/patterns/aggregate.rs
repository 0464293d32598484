//! Folds per-pattern detections into one aggregate signal.

use crate::models::pattern::{
    PatternAggregate, PatternDirection, PatternResult, RecentOccurrence, SignalStrength,
};

use super::detect::PatternDetection;

/// Recent-occurrence listings stop growing past this many entries.
const RECENT_OCCURRENCE_CAP: usize = 10;

/// Bucket every detection by direction and derive the overall signal.
pub fn aggregate_patterns(detections: &[PatternDetection]) -> PatternAggregate {
    let mut aggregate = PatternAggregate::empty();
    let mut recent: Vec<RecentOccurrence> = Vec::new();

    for detection in detections {
        let PatternResult::Detected {
            direction,
            ref occurrences,
            ..
        } = detection.result
        else {
            continue;
        };

        let name = detection.kind.name();
        aggregate.detected_patterns.push(name);

        // A detection carrying an explicit direction wins over the static
        // membership table; indecision detections fall back to it.
        let bucket = match direction {
            PatternDirection::Bullish | PatternDirection::Bearish => direction,
            PatternDirection::Neutral => detection.kind.bias(),
        };
        match bucket {
            PatternDirection::Bullish => aggregate.bullish_patterns.push(name),
            PatternDirection::Bearish => aggregate.bearish_patterns.push(name),
            PatternDirection::Neutral => aggregate.neutral_patterns.push(name),
        }

        for occurrence in occurrences {
            recent.push(RecentOccurrence {
                pattern: name,
                timestamp: occurrence.timestamp,
                direction: occurrence.direction,
                magnitude: occurrence.magnitude,
            });
        }
    }

    let bullish = aggregate.bullish_patterns.len();
    let bearish = aggregate.bearish_patterns.len();
    aggregate.overall_signal = if bullish > bearish {
        PatternDirection::Bullish
    } else if bearish > bullish {
        PatternDirection::Bearish
    } else {
        PatternDirection::Neutral
    };

    let total = aggregate.detected_patterns.len();
    aggregate.strength = if total >= 3 {
        SignalStrength::Strong
    } else if total >= 2 {
        SignalStrength::Moderate
    } else {
        SignalStrength::Weak
    };

    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent.truncate(RECENT_OCCURRENCE_CAP);
    aggregate.recent_occurrences = recent;

    aggregate
}
