//! Child-process adapters for the implementations under test
//!
//! The driver never speaks TFTP itself. Each implementation is an
//! opaque executable, wrapped behind [`TransferRunner`] so the loop can
//! be exercised against fakes in tests. Elapsed time is measured
//! directly around the child's lifetime with `Instant`; the child's
//! stdout/stderr are inherited and interleave with the harness output.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::params::{BenchParams, Operation};

/// Poll interval while waiting on a child with a deadline
const WAIT_POLL: Duration = Duration::from_millis(20);

/// Outcome of a single timed transfer attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOutcome {
    pub elapsed: Duration,
    /// Child exit code; `None` if killed by a signal or on timeout
    pub exit_code: Option<i32>,
    pub success: bool,
    pub timed_out: bool,
}

/// Capability interface: run one timed transfer of `fixture`
pub trait TransferRunner {
    /// Label used in result records ("reference" / "candidate")
    fn label(&self) -> &str;

    /// Transfer the given local fixture path in the direction and mode
    /// described by `params`, blocking until completion or deadline.
    fn run(&self, fixture: &Path, params: &BenchParams) -> Result<TransferOutcome, HarnessError>;
}

/// Adapter for the reference TFTP client (tftp-hpa argument shape):
/// `tftp -m <mode> <host> <port> -c <get|put> <remote> <local>`
pub struct ReferenceRunner {
    bin: PathBuf,
    host: String,
    port: u16,
    dest_path: PathBuf,
    timeout: Duration,
}

impl ReferenceRunner {
    pub fn new(config: &HarnessConfig) -> Self {
        ReferenceRunner {
            bin: config.reference_bin.clone(),
            host: config.server_host.clone(),
            port: config.server_port,
            dest_path: config.dest_path.clone(),
            timeout: config.transfer_timeout,
        }
    }
}

impl TransferRunner for ReferenceRunner {
    fn label(&self) -> &str {
        "reference"
    }

    fn run(&self, fixture: &Path, params: &BenchParams) -> Result<TransferOutcome, HarnessError> {
        let remote = remote_name(fixture);
        let mut cmd = Command::new(&self.bin);
        cmd.arg("-m")
            .arg(params.mode.as_str())
            .arg(&self.host)
            .arg(self.port.to_string())
            .arg("-c");
        match params.operation {
            Operation::Get => cmd.arg("get").arg(remote).arg(&self.dest_path),
            Operation::Put => cmd.arg("put").arg(fixture).arg(remote),
        };
        debug!(runner = self.label(), fixture = %remote, "spawning reference client");
        timed_wait(cmd, self.timeout)
    }
}

/// Adapter for the candidate client pair. Each candidate binary takes a
/// single path argument; server address and transfer mode are fixed by
/// the candidate's own startup contract.
pub struct CandidateRunner {
    get_bin: PathBuf,
    put_bin: PathBuf,
    timeout: Duration,
}

impl CandidateRunner {
    pub fn new(config: &HarnessConfig) -> Self {
        CandidateRunner {
            get_bin: config.candidate_get_bin.clone(),
            put_bin: config.candidate_put_bin.clone(),
            timeout: config.transfer_timeout,
        }
    }
}

impl TransferRunner for CandidateRunner {
    fn label(&self) -> &str {
        "candidate"
    }

    fn run(&self, fixture: &Path, params: &BenchParams) -> Result<TransferOutcome, HarnessError> {
        let cmd = match params.operation {
            Operation::Get => {
                let mut cmd = Command::new(&self.get_bin);
                cmd.arg(remote_name(fixture));
                cmd
            }
            Operation::Put => {
                let mut cmd = Command::new(&self.put_bin);
                cmd.arg(fixture);
                cmd
            }
        };
        debug!(runner = self.label(), fixture = %remote_name(fixture), "spawning candidate client");
        timed_wait(cmd, self.timeout)
    }
}

/// Remote name is the fixture's file name, never its local path
fn remote_name(fixture: &Path) -> &str {
    fixture
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
}

/// Spawn the command and block until it exits or the deadline passes.
/// On deadline the child is killed and the outcome marked timed out.
fn timed_wait(mut cmd: Command, timeout: Duration) -> Result<TransferOutcome, HarnessError> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let start = Instant::now();
    let mut child = cmd.spawn().map_err(|source| HarnessError::Spawn {
        program: program.clone(),
        source,
    })?;

    let deadline = start + timeout;
    loop {
        match child.try_wait().map_err(|source| HarnessError::Spawn {
            program: program.clone(),
            source,
        })? {
            Some(status) => {
                return Ok(TransferOutcome {
                    elapsed: start.elapsed(),
                    exit_code: status.code(),
                    success: status.success(),
                    timed_out: false,
                });
            }
            None => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok(TransferOutcome {
                        elapsed: start.elapsed(),
                        exit_code: None,
                        success: false,
                        timed_out: true,
                    });
                }
                thread::sleep(WAIT_POLL);
            }
        }
    }
}
