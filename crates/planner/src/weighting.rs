//! Weighting engine: one positive integer weight per topic.

use crate::matching::{matches_any, normalize_needles};

/// Weight each topic, in topic order.
///
/// A topic gets `weak_weight` when any weak substring occurs in its name
/// (case-insensitive), otherwise 1.
pub fn topic_weights(topics: &[String], weak_topics: &[String], weak_weight: u32) -> Vec<u32> {
    let needles = normalize_needles(weak_topics);
    topics
        .iter()
        .map(|t| if matches_any(t, &needles) { weak_weight } else { 1 })
        .collect()
}
