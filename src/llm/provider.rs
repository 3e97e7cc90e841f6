//! Credential resolution — env var first, OS keychain second.
//!
//! The Gemini key must be available before the session becomes usable;
//! a missing key is a fatal startup condition, not a per-call error.

pub const GEMINI_ENV_KEY: &str = "GEMINI_API_KEY";

/// Keychain service name under which the key is stored.
const KEYRING_SERVICE: &str = "prompt-polish";
const KEYRING_USER: &str = "gemini";

/// Make sure a Gemini API key is available to the process.
///
/// Checks the env var (already populated from `.env.local`/`.env` at
/// startup), then the OS keychain. A keychain hit is loaded into the env
/// so the client can read it. Returns `Err` when neither source has a key.
pub fn ensure_api_key() -> Result<(), String> {
    if std::env::var(GEMINI_ENV_KEY)
        .map(|k| !k.is_empty())
        .unwrap_or(false)
    {
        return Ok(());
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        if let Ok(key) = entry.get_password() {
            if !key.is_empty() {
                std::env::set_var(GEMINI_ENV_KEY, &key);
                log::info!("[SETTINGS] Loaded Gemini key from OS keychain");
                return Ok(());
            }
        }
    }

    Err(format!(
        "{} is not set. Export it, put it in .env.local, or store it with the :key command.",
        GEMINI_ENV_KEY
    ))
}

/// Save an API key to the OS keychain and the current session's env.
pub fn save_api_key(api_key: &str) -> Result<(), String> {
    if api_key.is_empty() {
        return Err("API key is empty".to_string());
    }

    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .map_err(|e| format!("Keyring error: {}", e))?;
    entry
        .set_password(api_key)
        .map_err(|e| format!("Failed to save key: {}", e))?;

    std::env::set_var(GEMINI_ENV_KEY, api_key);
    log::info!("[SETTINGS] Gemini API key saved to OS keychain");
    Ok(())
}
