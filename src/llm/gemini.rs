//! Gemini OPTIMIZE call — one non-streaming `generateContent` request.
//!
//! One invocation means exactly one outbound HTTP call: no retries, no
//! partial output. The full segment sequence or a typed error arrives
//! atomically. Streaming is deliberately not used here.

use super::error::OptimizeError;
use super::parse;
use super::prompts::{self, OPTIMIZE_SYSTEM_PROMPT};
use super::provider::GEMINI_ENV_KEY;
use super::types::OptimizedSegment;

/// Send `prompt` to Gemini and return the optimized segment sequence.
///
/// The caller guarantees `prompt` is non-empty after trimming — empty
/// input is a local validation error and never reaches this function.
pub async fn optimize_prompt(
    model: &str,
    prompt: &str,
) -> Result<Vec<OptimizedSegment>, OptimizeError> {
    let api_key = match std::env::var(GEMINI_ENV_KEY) {
        Ok(key) if !key.is_empty() => key,
        _ => {
            // Startup verifies the key, so hitting this means the env
            // changed mid-session. Still a transport-class failure.
            return Err(OptimizeError::Transport(format!(
                "{} is not set",
                GEMINI_ENV_KEY
            )));
        }
    };

    log::info!("[LLM] Provider: gemini");
    log::info!("[LLM] Model: {}", model);
    log::info!("[LLM] Prompt: {} chars", prompt.len());

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        model, api_key
    );

    let start = std::time::Instant::now();

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{"text": prompt}]
                }
            ],
            "systemInstruction": {
                "parts": [{"text": OPTIMIZE_SYSTEM_PROMPT}]
            },
            "generationConfig": {
                "maxOutputTokens": prompts::MAX_OUTPUT_TOKENS,
                "temperature": prompts::TEMPERATURE,
                "responseMimeType": "application/json",
                "responseSchema": prompts::response_schema()
            }
        }))
        .send()
        .await
        .map_err(|e| OptimizeError::Transport(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| OptimizeError::Transport(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        log::error!("[LLM] Gemini API returned {}: {}", status, body);
        return Err(OptimizeError::Transport(gemini_error_message(status, &body)));
    }

    log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());

    let text = extract_gemini_text(&body)?;
    let segments = parse::parse_segments(&text)?;

    let changed = segments.iter().filter(|s| s.is_changed).count();
    log::info!(
        "[LLM] Parsed {} segments ({} changed)",
        segments.len(),
        changed
    );

    Ok(segments)
}

/// Pull a readable message out of a Gemini error body, falling back to
/// the raw status + body when the envelope is not what we expect.
fn gemini_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = v["error"]["message"].as_str() {
            return format!("Gemini API error: {}", msg);
        }
    }
    let snippet: String = body.chars().take(200).collect();
    format!("HTTP {}: {}", status, snippet)
}

/// Extract the model text from a `generateContent` response envelope.
///
/// Gemini format: `candidates[0].content.parts[*].text` — the first text
/// part wins. A well-formed envelope with no text part is an empty
/// response; an unreadable envelope is a transport failure.
fn extract_gemini_text(body: &str) -> Result<String, OptimizeError> {
    let v: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| OptimizeError::Transport(format!("Unreadable Gemini response: {}", e)))?;

    let text = v["candidates"][0]["content"]["parts"]
        .as_array()
        .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(OptimizeError::EmptyResponse);
    }
    Ok(text.to_string())
}
