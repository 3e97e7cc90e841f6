//! Model output normalization — fence stripping + schema enforcement.
//!
//! `responseMimeType: "application/json"` should give us clean JSON, but
//! models occasionally wrap the body in a markdown code fence anyway. The
//! strip here is deliberately narrow: a literal leading/trailing fence
//! marker only, never a general-purpose sanitizer, so legitimate content
//! containing backticks is left alone.

use super::error::OptimizeError;
use super::types::OptimizedSegment;

/// Strip a literal markdown code fence from the very start/end of `text`.
///
/// The leading marker may carry a `json` tag. Each side is stripped
/// independently; a mismatched fence is treated as absence of fencing,
/// not an error.
pub fn strip_code_fences(text: &str) -> &str {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix("```") {
        let rest = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
        s = rest.trim_start();
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest.trim_end();
    }
    s
}

/// Normalize raw model text into the ordered segment sequence.
///
/// Enforces shape only — each element must carry `segment`, `isChanged`
/// and `reason`. Field values are trusted from the model (the gap-free
/// partition invariant is not re-verified here).
pub fn parse_segments(raw: &str) -> Result<Vec<OptimizedSegment>, OptimizeError> {
    if raw.trim().is_empty() {
        return Err(OptimizeError::EmptyResponse);
    }

    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(OptimizeError::EmptyResponse);
    }

    let value: serde_json::Value = serde_json::from_str(cleaned)?;
    if !value.is_array() {
        return Err(OptimizeError::NotAnArray);
    }

    let segments: Vec<OptimizedSegment> = serde_json::from_value(value)?;
    if segments.is_empty() {
        // An optimize call never yields an empty sequence.
        return Err(OptimizeError::EmptyResponse);
    }
    Ok(segments)
}
