use std::io::{BufRead, Write};

use helpdesk_triage_core::{TicketClassifier, TriageResult};
use tracing::{debug, info};

pub const BANNER: &str = "=== Helpdesk Ticket Triage Tool ===";
pub const PROMPT: &str = "Describe the issue: ";
pub const NO_DESCRIPTION: &str = "No description provided. Exiting.";

/// How a triage result is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Prompt once, read one line and print the triage result.
///
/// EOF before any input is treated like an empty description. Bytes that are
/// not valid UTF-8 are replaced rather than rejected. In JSON mode the banner,
/// prompt and notices go to `status` so `out` only carries JSON.
pub fn run_interactive<R: BufRead, W: Write, S: Write>(
    classifier: &TicketClassifier,
    mut input: R,
    out: &mut W,
    status: &mut S,
    format: OutputFormat,
) -> std::io::Result<()> {
    {
        let notices: &mut dyn Write = match format {
            OutputFormat::Summary => &mut *out,
            OutputFormat::Json => &mut *status,
        };
        writeln!(notices, "{}", BANNER)?;
        write!(notices, "{}", PROMPT)?;
        notices.flush()?;
    }

    let mut buf = Vec::new();
    let read = input.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);
    debug!(bytes = read, "read description");

    let Some(description) = non_empty(&line) else {
        return write_no_description(out, status, format);
    };

    if format == OutputFormat::Summary {
        writeln!(out)?;
    }
    write_result(&classifier.classify(description), out, format)
}

/// Triage a description that was supplied up front.
pub fn run_once<W: Write, S: Write>(
    classifier: &TicketClassifier,
    description: &str,
    out: &mut W,
    status: &mut S,
    format: OutputFormat,
) -> std::io::Result<()> {
    match non_empty(description) {
        Some(description) => write_result(&classifier.classify(description), out, format),
        None => write_no_description(out, status, format),
    }
}

fn non_empty(description: &str) -> Option<&str> {
    let description = description.trim();
    (!description.is_empty()).then_some(description)
}

fn write_no_description<W: Write, S: Write>(
    out: &mut W,
    status: &mut S,
    format: OutputFormat,
) -> std::io::Result<()> {
    info!("empty description, nothing to triage");
    match format {
        OutputFormat::Summary => writeln!(out, "{}", NO_DESCRIPTION),
        OutputFormat::Json => writeln!(status, "{}", NO_DESCRIPTION),
    }
}

fn write_result<W: Write>(
    result: &TriageResult,
    out: &mut W,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Summary => {
            writeln!(out, "--- Triage Summary ---")?;
            writeln!(out, "{}", result)?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
