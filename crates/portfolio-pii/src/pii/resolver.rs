//! Overlap resolution between raw hits.
//!
//! Raw hits come from independent rules, so the same text may be claimed by
//! several of them. Resolution folds the hits in discovery order into an
//! accepted set: a hit that overlaps nothing is accepted, a hit that
//! overlaps accepted items replaces them only when its confidence is
//! strictly greater than each of theirs. Ties keep the incumbent.

use crate::types::DetectedItem;

/// Resolve overlapping hits and sort the survivors by start offset.
///
/// The returned items never overlap.
#[must_use]
pub fn resolve(hits: impl IntoIterator<Item = DetectedItem>) -> Vec<DetectedItem> {
    let mut accepted: Vec<DetectedItem> = Vec::new();

    for hit in hits {
        let beats_all = accepted
            .iter()
            .filter(|existing| existing.span.overlaps(&hit.span))
            .all(|existing| hit.confidence > existing.confidence);

        if beats_all {
            accepted.retain(|existing| !existing.span.overlaps(&hit.span));
            accepted.push(hit);
        }
    }

    accepted.sort_by_key(|item| item.span.start);
    accepted
}
