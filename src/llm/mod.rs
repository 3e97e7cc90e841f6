//! LLM domain — the prompt optimization client.
//!
//! Public API for the Brain layer of Prompt Polish. External code should
//! only use what is exported here.
//!
//! Layout:
//!   - gemini.rs   — the single outbound `generateContent` call
//!   - parse.rs    — fence stripping + schema enforcement
//!   - prompts.rs  — system instruction + response schema
//!   - provider.rs — credential resolution (env var / OS keychain)
//!   - types.rs    — the segment contract
//!   - error.rs    — the optimize error taxonomy

mod error;
mod gemini;
pub mod parse;
pub mod prompts;
pub mod provider;
pub mod types;

pub use error::OptimizeError;
pub use gemini::optimize_prompt;
pub use types::{full_text, is_already_optimal, OptimizedSegment};
