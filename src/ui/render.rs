//! Result and history rendering — pure string builders.
//!
//! Everything here returns a `String` so the interactive loop stays a
//! thin printer and the rendering rules are testable. `console` styles
//! degrade to plain text when stdout is not a terminal.

use crate::app::DisplayMode;
use crate::history::HistoryEntry;
use crate::llm::{self, OptimizedSegment};
use console::Style;

/// Rotating highlight palette for changed segments, keyed by the index
/// among changed segments only — unchanged segments are never colored.
fn palette() -> [Style; 5] {
    [
        Style::new().blue().bold(),
        Style::new().green().bold(),
        Style::new().yellow().bold(),
        Style::new().magenta().bold(),
        Style::new().cyan().bold(),
    ]
}

/// Render the current result according to the display mode.
pub fn render_result(segments: &[OptimizedSegment], mode: DisplayMode) -> String {
    if llm::is_already_optimal(segments) {
        return render_already_optimal(&segments[0]);
    }
    match mode {
        DisplayMode::Plain => llm::full_text(segments),
        DisplayMode::Annotated => render_annotated(segments),
    }
}

/// Success banner for the single-element already-optimal case.
fn render_already_optimal(segment: &OptimizedSegment) -> String {
    let green = Style::new().green().bold();
    format!(
        "{}\n{}\n\n{}",
        green.apply_to("Great prompt — no changes needed."),
        segment.reason,
        segment.segment
    )
}

/// Annotated view: changed segments colored and tagged `[n]`, with the
/// rationale for each tag listed beneath the text. The terminal analog
/// of the hover tooltip.
fn render_annotated(segments: &[OptimizedSegment]) -> String {
    let styles = palette();
    let mut body = String::new();
    let mut notes: Vec<String> = Vec::new();

    for segment in segments {
        if segment.is_changed {
            let style = &styles[notes.len() % styles.len()];
            let marker = format!("[{}]", notes.len() + 1);
            body.push_str(&style.apply_to(&segment.segment).to_string());
            body.push_str(&style.apply_to(&marker).to_string());
            notes.push(format!(
                "{} {}",
                style.apply_to(&marker),
                segment.reason
            ));
        } else {
            body.push_str(&segment.segment);
        }
    }

    if notes.is_empty() {
        return body;
    }
    format!("{}\n\n{}", body, notes.join("\n"))
}

/// Numbered most-recent-first history listing.
pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "Your recent prompts will appear here.".to_string();
    }

    let dim = Style::new().dim();
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{:>3}. {}  {}",
                i + 1,
                truncate(&entry.original_prompt, 60),
                dim.apply_to(display_time(&entry.id))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First `max` characters of `text`, ellipsized, newlines flattened.
fn truncate(text: &str, max: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}

/// Human-readable form of an entry's timestamp id.
fn display_time(id: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(id) {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => id.to_string(),
    }
}
