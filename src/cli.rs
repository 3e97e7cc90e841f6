//! Command-line options.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "prompt-polish")]
#[command(version, about = "Rewrite a prompt for effectiveness, with annotated changes")]
pub struct Args {
    /// Gemini model to call.
    #[arg(long, default_value = crate::llm::prompts::GEMINI_MODEL)]
    pub model: String,

    /// How many past optimizations to keep for this session.
    #[arg(long, default_value_t = crate::history::DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    /// Start in plain display mode (no change highlighting).
    #[arg(long)]
    pub plain: bool,
}
