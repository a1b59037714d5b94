//! Error rendering for the binaries

use std::io::{self, Write};

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::error::TextfixError;

/// Render an error for stderr.
pub fn format_error(err: &anyhow::Error, color: bool) -> String {
    let tag = if color {
        "[ERROR]".red().bold().to_string()
    } else {
        "[ERROR]".to_string()
    };

    let mut out = format!("{} {}\n", tag, err);
    if let Some(hint) = err.downcast_ref::<TextfixError>().and_then(hint_for) {
        out.push_str(&format!("  {}\n", hint));
    }
    out
}

fn hint_for(err: &TextfixError) -> Option<&'static str> {
    match err {
        TextfixError::FileNotFound { .. } => Some("Check the path and try again."),
        TextfixError::InvalidUtf8 { .. } => Some("Only UTF-8 text files can be rewritten."),
        TextfixError::WriteFailed { .. } => Some("Files listed before it were already rewritten."),
        _ => None,
    }
}

/// Write an error as one NDJSON `error` event.
pub fn write_json_error(err: &anyhow::Error, out: &mut dyn Write) -> io::Result<()> {
    let output = serde_json::json!({
        "event": "error",
        "message": err.to_string(),
        "path": err
            .downcast_ref::<TextfixError>()
            .and_then(TextfixError::path)
            .map(|p| p.display().to_string()),
    });
    writeln!(out, "{}", output)?;
    out.flush()
}

/// Print an error to stderr, or as a JSON event on stdout.
///
/// A closed stdout drops the JSON event silently.
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        match write_json_error(err, &mut io::stdout().lock()) {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                eprint!("{}", format_error(err, use_color()));
            }
            _ => {}
        }
        return;
    }

    eprint!("{}", format_error(err, use_color()));
}

/// True when the error is stdout going away (e.g. piped into `head`).
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    let io = match err.downcast_ref::<TextfixError>() {
        Some(TextfixError::Output(io)) => Some(io),
        _ => err.downcast_ref::<std::io::Error>(),
    };
    io.is_some_and(|e| e.kind() == std::io::ErrorKind::BrokenPipe)
}

fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
