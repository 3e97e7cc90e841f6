//! LLM response types — the segment contract.
//!
//! The model returns JSON that deserializes directly into these types.
//! Concatenating `segment` fields in order reconstructs the full rewritten
//! prompt; the partition is trusted from the model, not re-verified here.

use serde::{Deserialize, Serialize};

/// One contiguous span of the rewritten prompt.
///
/// `reason` is non-empty when `is_changed` is true, and empty otherwise —
/// except the single-element already-optimal result, where the model keeps
/// `is_changed` false but uses `reason` to justify leaving the prompt alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedSegment {
    pub segment: String,
    pub is_changed: bool,
    pub reason: String,
}

/// True iff `segments` is the special "already optimal" result:
/// exactly one element, unchanged, with a non-empty reason.
///
/// A lone changed segment, or a lone unchanged segment with an empty
/// reason, is ordinary output.
pub fn is_already_optimal(segments: &[OptimizedSegment]) -> bool {
    segments.len() == 1 && !segments[0].is_changed && !segments[0].reason.is_empty()
}

/// Concatenate all segment texts in order — the full rewritten prompt.
///
/// Used by copy-to-clipboard and the plain display mode.
pub fn full_text(segments: &[OptimizedSegment]) -> String {
    segments.iter().map(|s| s.segment.as_str()).collect()
}
