//! Interactive terminal front-end.
//!
//! A thin read-dispatch-print loop over the session state. Plain input
//! submits a prompt; `:commands` carry every other user intent. All
//! rendering rules live in render.rs.

mod render;

use crate::app::{DisplayMode, Session};
use crate::llm;
use console::Style;
use dialoguer::Input;
use std::io;

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    History,
    Copy,
    Mode,
    Clear,
    Use(&'a str),
    Key(&'a str),
    Unknown(&'a str),
    Submit(&'a str),
}

/// Parse one input line.
///
/// Anything not starting with `:` is a prompt to submit. Commands are
/// matched on the first whitespace-split token, so `:useless` is an
/// unknown command rather than a `:use`.
fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    if !line.starts_with(':') {
        return Command::Submit(line);
    }
    let (head, arg) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head {
        ":quit" | ":q" => Command::Quit,
        ":help" | ":h" => Command::Help,
        ":history" => Command::History,
        ":copy" => Command::Copy,
        ":mode" => Command::Mode,
        ":clear" => Command::Clear,
        ":use" => Command::Use(arg),
        ":key" => Command::Key(arg),
        _ => Command::Unknown(head),
    }
}

/// Run the interactive loop until `:quit` or end of input.
pub async fn run(session: &mut Session) -> io::Result<()> {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    println!("{}", bold.apply_to("Prompt Polish"));
    println!(
        "{}",
        dim.apply_to(format!(
            "Model: {} — type a prompt to optimize it, :help for commands.",
            session.model()
        ))
    );

    loop {
        let Some(line) = read_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::History => {
                println!("{}", render::render_history(session.history.list()));
            }
            Command::Copy => copy_current(session),
            Command::Mode => {
                session.toggle_display_mode();
                let mode = match session.display_mode {
                    DisplayMode::Annotated => "annotated",
                    DisplayMode::Plain => "plain",
                };
                println!("Display mode: {}", mode);
                if let Some(segments) = &session.result {
                    println!("{}", render::render_result(segments, session.display_mode));
                }
            }
            Command::Clear => {
                session.clear();
                println!("Cleared.");
            }
            Command::Use(arg) => select_entry(session, arg),
            Command::Key(key) => match llm::provider::save_api_key(key) {
                Ok(()) => println!("API key saved to the OS keychain."),
                Err(e) => println!("{}", e),
            },
            Command::Unknown(cmd) => println!("Unknown command: {} — try :help", cmd),
            Command::Submit(prompt) => {
                println!("{}", dim.apply_to("Optimizing…"));
                session.submit(prompt).await;
                print_outcome(session);
            }
        }
    }

    Ok(())
}

/// Read one line via a dialoguer prompt, off the runtime's worker
/// threads (the read blocks). `None` means end of input.
async fn read_line() -> io::Result<Option<String>> {
    let result = tokio::task::spawn_blocking(|| {
        Input::<String>::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
    })
    .await
    .map_err(io::Error::other)?;

    match result {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(ref e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(io::Error::other(e)),
    }
}

/// Print the current result or error after a submit.
fn print_outcome(session: &Session) {
    if let Some(error) = &session.error {
        println!("{}", Style::new().red().apply_to(error));
        return;
    }
    if let Some(segments) = &session.result {
        println!("{}", render::render_result(segments, session.display_mode));
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to(":copy to copy the rewritten prompt, :mode to toggle the view.")
        );
    }
}

/// Resolve a 1-based history position to its entry id and restore it.
fn select_entry(session: &mut Session, arg: &str) {
    let Ok(position) = arg.parse::<usize>() else {
        println!("Usage: :use N (see :history for numbers)");
        return;
    };
    let Some(id) = session
        .history
        .list()
        .get(position.wrapping_sub(1))
        .map(|e| e.id.clone())
    else {
        println!("No history entry {}.", position);
        return;
    };

    if session.restore(&id) {
        println!("Restored prompt:\n{}", session.input);
        if let Some(segments) = &session.result {
            println!("{}", render::render_result(segments, session.display_mode));
        }
    }
}

/// Copy the concatenated rewritten prompt to the system clipboard.
///
/// arboard gives native clipboard access — works where terminal escape
/// tricks do not.
fn copy_current(session: &Session) {
    let Some(segments) = &session.result else {
        println!("Nothing to copy yet.");
        return;
    };
    let text = llm::full_text(segments);
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(&text)) {
        Ok(()) => {
            log::info!("[UI] Copied {} chars to clipboard", text.len());
            println!("Copied {} characters.", text.chars().count());
        }
        Err(e) => println!("Clipboard unavailable: {}", e),
    }
}

fn print_help() {
    println!(
        "\
Type a prompt on one line and press Enter to optimize it.

  :history     list past optimizations, most recent first
  :use N       restore entry N from the history (no new API call)
  :copy        copy the rewritten prompt to the clipboard
  :mode        toggle annotated / plain display
  :clear       reset input, result, and error
  :key VALUE   store a Gemini API key in the OS keychain
  :quit        exit"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_match_on_the_first_token_only() {
        assert_eq!(parse_command(":use 2"), Command::Use("2"));
        assert_eq!(parse_command(":key abc123"), Command::Key("abc123"));
        assert_eq!(parse_command(":useless 2"), Command::Unknown(":useless"));
        assert_eq!(parse_command(":keyboard cat"), Command::Unknown(":keyboard"));
    }

    #[test]
    fn bare_use_and_key_carry_empty_args() {
        assert_eq!(parse_command(":use"), Command::Use(""));
        assert_eq!(parse_command(":key"), Command::Key(""));
    }

    #[test]
    fn plain_text_is_a_submit() {
        assert_eq!(
            parse_command("  explain monads simply  "),
            Command::Submit("explain monads simply")
        );
    }

    #[test]
    fn command_aliases_resolve() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }
}
