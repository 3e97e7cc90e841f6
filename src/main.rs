//! Prompt Polish — binary entry point.
//!
//! Startup order matters: env files feed both the logger config and the
//! credential check, and a missing API key is fatal before the session
//! ever becomes usable. No degraded mode.

use clap::Parser;
use prompt_polish::app::{DisplayMode, Session};
use prompt_polish::cli::Args;
use prompt_polish::llm::provider;
use prompt_polish::ui;

#[tokio::main]
async fn main() {
    // Load .env.local → .env from the project root. CARGO_MANIFEST_DIR is
    // the compile-time crate path, so this works regardless of the
    // binary's working directory; falls back to the cwd for installed
    // binaries.
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    'env_load: for dir in [manifest_dir, std::path::Path::new(".")] {
        for env_file in [".env.local", ".env"] {
            let path = dir.join(env_file);
            if path.exists() {
                match dotenvy::from_path(&path) {
                    Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                    Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
                }
                break 'env_load;
            }
        }
    }

    env_logger::init();

    let args = Args::parse();

    if let Err(e) = provider::ensure_api_key() {
        log::error!("[STARTUP] {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    log::info!("[STARTUP] Prompt Polish starting — model {}", args.model);

    let display_mode = if args.plain {
        DisplayMode::Plain
    } else {
        DisplayMode::Annotated
    };
    let mut session = Session::new(args.model, args.history_limit, display_mode);

    if let Err(e) = ui::run(&mut session).await {
        log::error!("[STARTUP] Terminal I/O failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
