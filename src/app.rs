//! Session state and orchestration.
//!
//! One struct owns the whole application state — input text, the current
//! result or error, the loading flag, the display mode, and the history
//! store. The UI reads this state and calls the intent methods below; no
//! ambient globals.

use crate::history::{HistoryEntry, HistoryStore};
use crate::llm::{self, OptimizeError, OptimizedSegment};
use std::future::Future;

/// How the result pane renders segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Changed segments colored, with numbered rationale annotations.
    Annotated,
    /// The bare concatenated rewritten prompt.
    Plain,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Annotated => DisplayMode::Plain,
            DisplayMode::Plain => DisplayMode::Annotated,
        }
    }
}

/// The whole application state, owned by the interactive loop.
pub struct Session {
    model: String,
    pub input: String,
    pub result: Option<Vec<OptimizedSegment>>,
    pub error: Option<String>,
    pub loading: bool,
    pub display_mode: DisplayMode,
    pub history: HistoryStore,
}

impl Session {
    pub fn new(model: String, history_limit: usize, display_mode: DisplayMode) -> Self {
        Self {
            model,
            input: String::new(),
            result: None,
            error: None,
            loading: false,
            display_mode,
            history: HistoryStore::new(history_limit),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Submit a prompt for optimization through the Gemini client.
    pub async fn submit(&mut self, prompt: &str) {
        let model = self.model.clone();
        self.submit_with(prompt, |prompt| async move {
            llm::optimize_prompt(&model, &prompt).await
        })
        .await;
    }

    /// Submit a prompt through the supplied optimize call.
    ///
    /// Empty input (after trimming) is a local validation error and never
    /// reaches the client. A submit while a call is pending is rejected —
    /// one user action, one in-flight call. On success the result is
    /// recorded in history and becomes current; on failure the error
    /// message becomes current and history and result are left untouched
    /// for that attempt.
    pub async fn submit_with<F, Fut>(&mut self, prompt: &str, optimize: F)
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Vec<OptimizedSegment>, OptimizeError>>,
    {
        if prompt.trim().is_empty() {
            self.error = Some("Prompt must not be empty.".to_string());
            return;
        }
        if self.loading {
            self.error = Some("An optimization is already in progress.".to_string());
            return;
        }

        self.input = prompt.to_string();
        self.loading = true;
        self.error = None;
        self.result = None;

        log::info!("[SESSION] Optimizing prompt ({} chars)", prompt.len());

        match optimize(prompt.to_string()).await {
            Ok(segments) => {
                self.history
                    .record(HistoryEntry::new(prompt.to_string(), segments.clone()));
                self.result = Some(segments);
            }
            Err(e) => {
                log::error!("[SESSION] Optimize failed: {}", e);
                self.error = Some(format!(
                    "Could not optimize the prompt. Check your API key and try again. Error: {}",
                    e
                ));
            }
        }

        self.loading = false;
    }

    /// Reset input, result, and error. History survives.
    pub fn clear(&mut self) {
        self.input.clear();
        self.result = None;
        self.error = None;
    }

    /// Re-hydrate input and result from a history entry. No remote call.
    ///
    /// Returns false when no entry has that id.
    pub fn restore(&mut self, id: &str) -> bool {
        let Some(entry) = self.history.select(id) else {
            return false;
        };
        self.input = entry.original_prompt.clone();
        self.result = Some(entry.optimized_prompt.clone());
        self.error = None;
        log::info!("[SESSION] Restored history entry {}", id);
        true
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::OptimizedSegment;
    use std::cell::Cell;

    fn session() -> Session {
        Session::new("gemini-2.0-flash".to_string(), 50, DisplayMode::Annotated)
    }

    fn seg(text: &str, changed: bool, reason: &str) -> OptimizedSegment {
        OptimizedSegment {
            segment: text.to_string(),
            is_changed: changed,
            reason: reason.to_string(),
        }
    }

    #[tokio::test]
    async fn successful_submit_records_history_and_sets_result() {
        let mut s = session();
        let segments = vec![
            seg("You are a vet. ", true, "Added a role"),
            seg("Tell me about dogs.", false, ""),
        ];
        let returned = segments.clone();

        s.submit_with("tell me about dogs", |_| async move { Ok(returned) })
            .await;

        assert_eq!(s.history.len(), 1);
        assert_eq!(s.history.list()[0].original_prompt, "tell me about dogs");
        assert_eq!(s.history.list()[0].optimized_prompt, segments);
        assert_eq!(s.result.as_deref(), Some(segments.as_slice()));
        assert!(s.error.is_none());
        assert!(!s.loading);
        assert_eq!(s.input, "tell me about dogs");
    }

    #[tokio::test]
    async fn failed_submit_sets_error_and_leaves_history_untouched() {
        let mut s = session();
        s.history.record(crate::history::HistoryEntry {
            id: "t1".to_string(),
            original_prompt: "earlier".to_string(),
            optimized_prompt: vec![seg("earlier", false, "")],
        });

        s.submit_with("a new prompt", |_| async { Err(OptimizeError::EmptyResponse) })
            .await;

        // Only the pre-existing entry remains; nothing recorded for the
        // failed attempt, and no result is set.
        assert_eq!(s.history.len(), 1);
        assert_eq!(s.history.list()[0].original_prompt, "earlier");
        assert!(s.result.is_none());
        assert!(!s.loading);

        let error = s.error.as_deref().unwrap();
        assert!(error.starts_with("Could not optimize the prompt."));
        assert!(error.contains("empty response"));
    }

    #[tokio::test]
    async fn rejected_submits_never_invoke_the_client() {
        let mut s = session();
        let called = Cell::new(false);

        s.submit_with("   \n ", |_| {
            called.set(true);
            async { Ok(Vec::new()) }
        })
        .await;
        assert!(!called.get());
        assert_eq!(s.error.as_deref(), Some("Prompt must not be empty."));
        assert!(s.history.is_empty());

        s.loading = true;
        s.submit_with("a real prompt", |_| {
            called.set(true);
            async { Ok(Vec::new()) }
        })
        .await;
        assert!(!called.get());
        assert_eq!(
            s.error.as_deref(),
            Some("An optimization is already in progress.")
        );
        assert!(s.history.is_empty());
    }

    #[tokio::test]
    async fn empty_input_is_rejected_locally() {
        let mut s = session();
        s.submit("   \n ").await;

        assert_eq!(s.error.as_deref(), Some("Prompt must not be empty."));
        assert!(s.result.is_none());
        assert!(s.history.is_empty());
        assert!(!s.loading);
    }

    #[tokio::test]
    async fn submit_while_loading_is_rejected() {
        let mut s = session();
        s.loading = true;
        s.submit("a real prompt").await;

        assert_eq!(
            s.error.as_deref(),
            Some("An optimization is already in progress.")
        );
        assert!(s.history.is_empty());
    }

    #[test]
    fn restore_rehydrates_input_and_result() {
        let mut s = session();
        let segments = vec![seg("optimized text", true, "Rewritten")];
        s.history.record(crate::history::HistoryEntry {
            id: "t1".to_string(),
            original_prompt: "original text".to_string(),
            optimized_prompt: segments.clone(),
        });
        s.error = Some("stale error".to_string());

        assert!(s.restore("t1"));
        assert_eq!(s.input, "original text");
        assert_eq!(s.result.as_deref(), Some(segments.as_slice()));
        assert!(s.error.is_none());
    }

    #[test]
    fn restore_unknown_id_leaves_state_alone() {
        let mut s = session();
        s.input = "typed so far".to_string();

        assert!(!s.restore("missing"));
        assert_eq!(s.input, "typed so far");
        assert!(s.result.is_none());
    }

    #[test]
    fn clear_keeps_history() {
        let mut s = session();
        s.history.record(crate::history::HistoryEntry {
            id: "t1".to_string(),
            original_prompt: "p".to_string(),
            optimized_prompt: vec![],
        });
        s.input = "p".to_string();
        s.error = Some("e".to_string());

        s.clear();
        assert!(s.input.is_empty());
        assert!(s.error.is_none());
        assert_eq!(s.history.len(), 1);
    }

    #[test]
    fn display_mode_toggles_both_ways() {
        let mut s = session();
        assert_eq!(s.display_mode, DisplayMode::Annotated);
        s.toggle_display_mode();
        assert_eq!(s.display_mode, DisplayMode::Plain);
        s.toggle_display_mode();
        assert_eq!(s.display_mode, DisplayMode::Annotated);
    }
}
