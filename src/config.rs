//! Process-wide harness configuration
//!
//! Everything the original harness embedded as literals (server
//! address, fixtures directory, size tiers, client binaries, throttle)
//! lives in one explicit structure so tests can substitute a mock
//! server address and small size tiers.

use std::path::PathBuf;
use std::time::Duration;

/// One fixture size tier: output file name plus exact byte length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeTier {
    /// Fixture file name encoding the tier (e.g. `010mb`)
    pub name: String,
    /// Exact byte length of the fixture
    pub bytes: u64,
}

impl SizeTier {
    pub fn new(name: impl Into<String>, bytes: u64) -> Self {
        SizeTier {
            name: name.into(),
            bytes,
        }
    }
}

/// One megabyte as the tiers define it
pub const MEGABYTE: u64 = 1_048_576;

/// Default corpus: 1, 10, 50, 100 and 250 megabytes
pub fn default_tiers() -> Vec<SizeTier> {
    [1u64, 10, 50, 100, 250]
        .iter()
        .map(|mb| SizeTier::new(format!("{mb:03}mb"), mb * MEGABYTE))
        .collect()
}

/// Fixed configuration shared by the fixture generator and the driver
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// TFTP server host the reference client connects to
    pub server_host: String,
    /// TFTP server port
    pub server_port: u16,
    /// Directory holding the fixture corpus
    pub fixtures_dir: PathBuf,
    /// Local destination path overwritten by each `get`
    pub dest_path: PathBuf,
    /// Reference TFTP client binary
    pub reference_bin: PathBuf,
    /// Candidate client binary for `get` transfers
    pub candidate_get_bin: PathBuf,
    /// Candidate client binary for `put` transfers
    pub candidate_put_bin: PathBuf,
    /// Pause between consecutive transfers, letting the server settle
    pub throttle: Duration,
    /// Deadline after which an in-flight transfer is killed
    pub transfer_timeout: Duration,
    /// Size tiers the generator materializes
    pub tiers: Vec<SizeTier>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 69,
            fixtures_dir: PathBuf::from("fixtures"),
            dest_path: PathBuf::from("/tmp/result"),
            reference_bin: PathBuf::from("tftp"),
            candidate_get_bin: PathBuf::from("./get"),
            candidate_put_bin: PathBuf::from("./put"),
            throttle: Duration::from_secs(1),
            transfer_timeout: Duration::from_secs(120),
            tiers: default_tiers(),
        }
    }
}
