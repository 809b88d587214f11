//! Error taxonomy for the benchmark harness
//!
//! Three families per the harness contract: setup errors (fixture
//! generation) and validation errors (driver arguments, missing corpus)
//! are fatal and map to exit code 1; per-transfer failures are recorded
//! and never surface as an `Err` from the driver loop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// All fatal error cases the harness can report
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Fixtures directory is missing; the generator has to run first
    #[error("fixtures directory {0:?} does not exist (run mkfixtures first)")]
    MissingCorpus(PathBuf),

    /// Transfer mode string outside {octet, netascii}
    #[error("invalid transfer mode {0:?} (expected \"octet\" or \"netascii\")")]
    InvalidMode(String),

    /// Operation string outside {get, put}
    #[error("invalid operation {0:?} (expected \"get\" or \"put\")")]
    InvalidOperation(String),

    /// Malformed HOST:PORT override
    #[error("invalid server address {0:?} (expected HOST:PORT)")]
    InvalidServer(String),

    /// Fixture directory could not be created
    #[error("failed to create fixtures directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fixture could not be written in full (disk full, permissions)
    #[error("failed to write fixture {path:?}: {source}")]
    FixtureWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Child process could not be spawned or awaited
    #[error("failed to run {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Other filesystem or stream errors
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl HarnessError {
    /// True for argument/corpus validation failures, which warrant a
    /// usage hint alongside the error message.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HarnessError::MissingCorpus(_)
                | HarnessError::InvalidMode(_)
                | HarnessError::InvalidOperation(_)
                | HarnessError::InvalidServer(_)
        )
    }
}
