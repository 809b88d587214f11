//! Result records and output formats
//!
//! One record per (fixture, implementation) pair. The driver prints a
//! human-readable line per transfer as it happens; `csv` and `json`
//! formats additionally emit the full table at the end of the run for
//! machine consumption.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use crate::params::{Mode, Operation};
use crate::runner::TransferOutcome;

/// A single timed transfer result
#[derive(Debug, Clone, Serialize)]
pub struct TransferRecord {
    /// Fixture file name (size-tier label)
    pub fixture: String,
    /// Implementation label: "reference" or "candidate"
    pub implementation: String,
    pub operation: Operation,
    pub mode: Mode,
    /// Elapsed wall-clock time in microseconds
    pub elapsed_us: u64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    pub timed_out: bool,
}

impl TransferRecord {
    pub fn from_outcome(
        fixture: &str,
        implementation: &str,
        operation: Operation,
        mode: Mode,
        outcome: TransferOutcome,
    ) -> Self {
        TransferRecord {
            fixture: fixture.to_string(),
            implementation: implementation.to_string(),
            operation,
            mode,
            elapsed_us: outcome.elapsed.as_micros() as u64,
            success: outcome.success,
            exit_code: outcome.exit_code,
            timed_out: outcome.timed_out,
        }
    }

    /// Record for a transfer that never produced an outcome (the child
    /// could not be spawned at all)
    pub fn failed(fixture: &str, implementation: &str, operation: Operation, mode: Mode) -> Self {
        TransferRecord {
            fixture: fixture.to_string(),
            implementation: implementation.to_string(),
            operation,
            mode,
            elapsed_us: 0,
            success: false,
            exit_code: None,
            timed_out: false,
        }
    }

    /// One human-readable line, printed live per transfer
    pub fn text_line(&self) -> String {
        let status = if self.timed_out {
            "TIMEOUT"
        } else if self.success {
            "ok"
        } else {
            "FAILED"
        };
        format!(
            "{:<8} {:<10} {}/{} {:>10}  {}",
            self.fixture,
            self.implementation,
            self.operation,
            self.mode,
            format_elapsed(Duration::from_micros(self.elapsed_us)),
            status
        )
    }
}

/// Human-friendly elapsed time: sub-second in milliseconds, otherwise
/// seconds with millisecond precision
fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{:.1}ms", elapsed.as_secs_f64() * 1000.0)
    } else {
        format!("{:.3}s", elapsed.as_secs_f64())
    }
}

/// Escape a CSV field (commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Emit the full record table as CSV
pub fn write_csv(records: &[TransferRecord], out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "fixture,implementation,operation,mode,elapsed_us,success,exit_code,timed_out"
    )?;
    for record in records {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            escape_field(&record.fixture),
            escape_field(&record.implementation),
            record.operation,
            record.mode,
            record.elapsed_us,
            record.success,
            record
                .exit_code
                .map(|c| c.to_string())
                .unwrap_or_default(),
            record.timed_out
        )?;
    }
    Ok(())
}

/// Emit the full record table as pretty-printed JSON
pub fn write_json(records: &[TransferRecord], out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)
}
