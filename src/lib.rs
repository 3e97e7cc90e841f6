//! Prompt Polish — library root.
//!
//! This is the app shell that wires the domains together. No business
//! logic lives here — only module declarations.
//!
//! Modules:
//!   - app.rs      — session state + submit/clear/restore orchestration
//!   - history.rs  — bounded most-recent-first optimization history
//!   - llm/        — the Gemini optimization client (the core contract)
//!   - ui/         — interactive terminal front-end
//!   - cli.rs      — command-line options

pub mod app;
pub mod cli;
pub mod history;
pub mod llm;
pub mod ui;
