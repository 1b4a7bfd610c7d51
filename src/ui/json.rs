//! NDJSON event output for `--json`.
//!
//! One JSON object per line: a `start` event, one `error` event per finding,
//! then `complete`.

use serde::Serialize;
use std::io::{self, Write};

use hassfest::{RunReport, ValidationError};

/// Event emitted when a run starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub action: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(action: &'a str) -> Self {
        Self {
            event: "start",
            action,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted for each validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct FindingEvent<'a> {
    pub event: &'static str,
    #[serde(flatten)]
    pub error: &'a ValidationError,
    pub blocking: bool,
}

/// Event emitted when a run completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub action: &'a str,
    pub success: bool,
    pub integrations: usize,
    pub errors: usize,
    pub blocking: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<String>,
}

impl<'a> CompleteEvent<'a> {
    pub fn from_report(report: &'a RunReport) -> Self {
        Self {
            event: "complete",
            action: report.action.as_str(),
            success: report.is_success(),
            integrations: report.integrations,
            errors: report.errors.len(),
            blocking: report.blocking,
            generated: report
                .generated
                .as_ref()
                .map(|p| p.display().to_string()),
        }
    }
}

/// Event emitted when the run aborts.
#[derive(Debug, Clone, Serialize)]
pub struct FatalEvent {
    pub event: &'static str,
    pub message: String,
}

impl FatalEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "fatal",
            message: message.into(),
        }
    }
}

/// Write a typed event to a writer as one NDJSON line.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Every finding plus the completion event for a report.
pub fn write_report<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    for error in &report.errors {
        write_typed_event(
            out,
            &FindingEvent {
                event: "error",
                error,
                blocking: hassfest::application::is_blocking(report.action, error),
            },
        )?;
    }
    write_typed_event(out, &CompleteEvent::from_report(report))
}
