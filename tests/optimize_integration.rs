//! Integration test for the OPTIMIZE call.
//!
//! Hits the real Gemini endpoint and checks that `optimize_prompt`
//! returns a well-formed segment sequence. Skips itself when no key is
//! configured, so CI without credentials stays green.
//!
//! Loads the API key from .env.local using dotenvy — same as the app.

use prompt_polish::llm::{full_text, optimize_prompt, prompts};

fn load_env() {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    for env_file in [".env.local", ".env"] {
        let path = manifest_dir.join(env_file);
        if path.exists() {
            dotenvy::from_path(&path).expect("env file should load");
            eprintln!("[TEST] Loaded {}", path.display());
            break;
        }
    }
}

fn key_present() -> bool {
    std::env::var("GEMINI_API_KEY")
        .map(|k| !k.is_empty())
        .unwrap_or(false)
}

#[tokio::test]
async fn optimize_returns_a_well_formed_partition() {
    load_env();
    if !key_present() {
        eprintln!("SKIP: No GEMINI_API_KEY");
        return;
    }

    let prompt = "tell me about dogs";

    eprintln!("[TEST] Optimizing {:?}...", prompt);
    let start = std::time::Instant::now();
    let segments = optimize_prompt(prompts::GEMINI_MODEL, prompt)
        .await
        .expect("optimize should succeed with a valid key");
    eprintln!(
        "[TEST] {} segments in {}ms",
        segments.len(),
        start.elapsed().as_millis()
    );

    // Never an empty sequence, and the partition concatenates to a
    // non-empty rewritten prompt.
    assert!(!segments.is_empty());
    let rewritten = full_text(&segments);
    assert!(!rewritten.trim().is_empty());

    // Changed segments must carry a rationale.
    for s in segments.iter().filter(|s| s.is_changed) {
        assert!(
            !s.reason.is_empty(),
            "changed segment without a reason: {:?}",
            s.segment
        );
    }
}

#[tokio::test]
async fn transport_failure_with_a_bad_model_is_typed() {
    load_env();
    if !key_present() {
        eprintln!("SKIP: No GEMINI_API_KEY");
        return;
    }

    let err = optimize_prompt("no-such-model-xyz", "tell me about dogs")
        .await
        .expect_err("a nonexistent model should fail");
    let msg = err.to_string();
    eprintln!("[TEST] Error: {}", msg);
    assert!(msg.contains("Gemini API"));
}
