//! Optimization client error taxonomy.
//!
//! Every failure mode of one optimize call maps to exactly one of these
//! variants. The session layer renders them as a single display string;
//! nothing here is retried.

use thiserror::Error;

/// What went wrong during a single optimize call.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The model produced no text at all (or only whitespace).
    #[error("the model returned an empty response")]
    EmptyResponse,

    /// The model text was present but not parseable as JSON after
    /// best-effort fence stripping, or the elements were the wrong shape.
    #[error("the model response was not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The model text parsed, but the top level was not an array.
    #[error("the model response was not a JSON array")]
    NotAnArray,

    /// The call to the Gemini endpoint itself failed: connection error,
    /// non-success status, unreadable response envelope, or a missing or
    /// rejected API key at call time.
    #[error("Gemini API request failed: {0}")]
    Transport(String),
}
