//! LLM prompt constants and the response schema.
//!
//! These are the contract between Prompt Polish and the model. The schema
//! is also enforced on our side after parsing (see parse.rs), so a model
//! that drifts from it fails loudly instead of rendering garbage.

pub const GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const MAX_OUTPUT_TOKENS: u32 = 4096;
pub const TEMPERATURE: f64 = 0.5;

/// OPTIMIZE system instruction.
///
/// Directs the model to rewrite the prompt (never merely critique it),
/// partition the rewritten text into a gap-free ordered segment sequence,
/// and mirror the input's language.
pub const OPTIMIZE_SYSTEM_PROMPT: &str = r#"You are a world-class prompt engineering expert for Large Language Models (LLMs). Your job is to **directly rewrite the prompt** supplied by the user to maximize its effectiveness. **Do not give the user general advice or tips.** Instead, **apply best practices yourself** by modifying the prompt.

Your response MUST be a JSON array of objects, strictly following the supplied schema.

1.  **Analyze and rewrite:** Analyze the language and intent of the prompt. **Rewrite it**, adding detail, context, an output format, or a role for the AI.
2.  **Segmentation:** Split the **NEW, REWRITTEN** prompt into logical segments so the changes are easy to read. The segments, concatenated in order, must reproduce the rewritten prompt exactly — no gaps, no overlaps.
3.  **Explaining changes (reason):**
    *   For every segment that was **changed or added**, set `isChanged` to `true`. In `reason`, **explain briefly and concretely what modification you made and what it is for.** Good examples: "Added a list format for readability", "Specified the target audience", "Set the AI's role to expert". Bad examples: "You should add formatting", "It is good to specify the audience". **Describe your action, do not lecture the user.**
    *   For segments left **unchanged**, set `isChanged` to `false` and `reason` to an empty string.
4.  **Already-optimal prompt:** If you judge the original prompt to be excellent and in no need of changes, return an array with a single object: `isChanged: false`, `segment` holding the original text, and `reason` explaining why it is already effective (e.g. "The prompt is already clear, specific, and complete.").
5.  **Language:** The entire response (segments and explanations) must be in the same language as the input prompt.
"#;

/// The required output schema, sent as `generationConfig.responseSchema`.
///
/// Array of `{segment: string, isChanged: boolean, reason: string}`, all
/// three fields required on every element.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "segment": {
                    "type": "STRING",
                    "description": "A fragment of the optimized prompt text."
                },
                "isChanged": {
                    "type": "BOOLEAN",
                    "description": "True if this segment was materially changed or added."
                },
                "reason": {
                    "type": "STRING",
                    "description": "If isChanged is true, a concise explanation of why the change was made. If false, an empty string — unless this is the single-segment notice that no changes were needed."
                }
            },
            "required": ["segment", "isChanged", "reason"]
        }
    })
}
