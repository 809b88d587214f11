//! The benchmark driver loop
//!
//! One linear pass: validate, enumerate the corpus, and for each
//! fixture run the reference transfer then the candidate transfer,
//! separated by a settle pause. Reference always precedes candidate;
//! note that the candidate may therefore benefit from OS file-cache
//! warmth on `put` workloads.
//!
//! A failed or timed-out transfer is recorded and logged, never fatal:
//! the harness exists to surface comparative data, and a complete pass
//! with holes beats an aborted one.

use std::io::Write;
use std::path::Path;
use std::thread;

use tracing::{info, warn};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::fixture;
use crate::params::BenchParams;
use crate::report::TransferRecord;
use crate::runner::TransferRunner;

/// Run the full benchmark pass.
///
/// `out` receives one human-readable line per transfer as it completes.
/// The returned records preserve invocation order: fixtures sorted by
/// name, reference before candidate within each fixture.
pub fn run(
    config: &HarnessConfig,
    params: &BenchParams,
    reference: &dyn TransferRunner,
    candidate: &dyn TransferRunner,
    out: &mut dyn Write,
) -> Result<Vec<TransferRecord>, HarnessError> {
    let fixtures = fixture::list_corpus(&config.fixtures_dir)?;
    info!(
        fixtures = fixtures.len(),
        mode = %params.mode,
        operation = %params.operation,
        "starting benchmark pass"
    );

    let mut records = Vec::with_capacity(fixtures.len() * 2);
    for path in &fixtures {
        for runner in [reference, candidate] {
            let record = run_one(runner, path, params);
            writeln!(out, "{}", record.text_line())?;
            records.push(record);
            // Let the server settle before the next measurement
            if !config.throttle.is_zero() {
                thread::sleep(config.throttle);
            }
        }
    }
    Ok(records)
}

fn run_one(runner: &dyn TransferRunner, path: &Path, params: &BenchParams) -> TransferRecord {
    let fixture_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match runner.run(path, params) {
        Ok(outcome) => {
            if !outcome.success {
                warn!(
                    fixture = %fixture_name,
                    implementation = runner.label(),
                    timed_out = outcome.timed_out,
                    exit_code = ?outcome.exit_code,
                    "transfer failed, continuing"
                );
            }
            TransferRecord::from_outcome(
                &fixture_name,
                runner.label(),
                params.operation,
                params.mode,
                outcome,
            )
        }
        Err(err) => {
            warn!(
                fixture = %fixture_name,
                implementation = runner.label(),
                error = %err,
                "transfer could not be started, continuing"
            );
            TransferRecord::failed(&fixture_name, runner.label(), params.operation, params.mode)
        }
    }
}
