//! CLI argument parsing for the benchmark driver

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::HarnessConfig;
use crate::error::HarnessError;

/// Output format for the end-of-run result table
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Per-transfer lines only (default)
    Text,
    /// CSV table for spreadsheet analysis
    Csv,
    /// JSON for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tftp-bench")]
#[command(version)]
#[command(about = "Time a candidate TFTP implementation against a reference client", long_about = None)]
pub struct Cli {
    /// Transfer mode: octet or netascii (defaults to octet)
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Operation: get or put (defaults to get)
    #[arg(value_name = "OPERATION")]
    pub operation: Option<String>,

    /// Output format for the result table emitted after the run
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Fixtures directory (populated by mkfixtures)
    #[arg(long = "fixtures-dir", value_name = "DIR")]
    pub fixtures_dir: Option<PathBuf>,

    /// TFTP server the reference client connects to
    #[arg(long = "server", value_name = "HOST:PORT")]
    pub server: Option<String>,

    /// Reference TFTP client binary
    #[arg(long = "reference-bin", value_name = "BIN", overrides_with = "reference_bin")]
    pub reference_bin: Option<PathBuf>,

    /// Candidate client binary for get transfers
    #[arg(long = "candidate-get-bin", value_name = "BIN", overrides_with = "candidate_get_bin")]
    pub candidate_get_bin: Option<PathBuf>,

    /// Candidate client binary for put transfers
    #[arg(long = "candidate-put-bin", value_name = "BIN")]
    pub candidate_put_bin: Option<PathBuf>,

    /// Per-transfer deadline in seconds
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Pause between consecutive transfers in milliseconds
    #[arg(long = "throttle-ms", value_name = "MS")]
    pub throttle_ms: Option<u64>,
}

impl Cli {
    /// Fold the optional overrides into a configuration; defaults
    /// reproduce the original harness's embedded constants.
    pub fn to_config(&self) -> Result<HarnessConfig, HarnessError> {
        let mut config = HarnessConfig::default();
        if let Some(dir) = &self.fixtures_dir {
            config.fixtures_dir = dir.clone();
        }
        if let Some(server) = &self.server {
            let (host, port) = server
                .rsplit_once(':')
                .ok_or_else(|| HarnessError::InvalidServer(server.clone()))?;
            config.server_host = host.to_string();
            config.server_port = port
                .parse()
                .map_err(|_| HarnessError::InvalidServer(server.clone()))?;
        }
        if let Some(bin) = &self.reference_bin {
            config.reference_bin = bin.clone();
        }
        if let Some(bin) = &self.candidate_get_bin {
            config.candidate_get_bin = bin.clone();
        }
        if let Some(bin) = &self.candidate_put_bin {
            config.candidate_put_bin = bin.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.transfer_timeout = std::time::Duration::from_secs(secs);
        }
        if let Some(ms) = self.throttle_ms {
            config.throttle = std::time::Duration::from_millis(ms);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cli_parses_both_positionals() {
        let cli = Cli::parse_from(["tftp-bench", "netascii", "put"]);
        assert_eq!(cli.mode.as_deref(), Some("netascii"));
        assert_eq!(cli.operation.as_deref(), Some("put"));
    }

    #[test]
    fn test_cli_legacy_single_and_zero_argument_forms() {
        let cli = Cli::parse_from(["tftp-bench", "octet"]);
        assert_eq!(cli.mode.as_deref(), Some("octet"));
        assert!(cli.operation.is_none());

        let cli = Cli::parse_from(["tftp-bench"]);
        assert!(cli.mode.is_none());
        assert!(cli.operation.is_none());
    }

    #[test]
    fn test_cli_rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["tftp-bench", "octet", "get", "extra"]).is_err());
    }

    #[test]
    fn test_server_override_parsed() {
        let cli = Cli::parse_from(["tftp-bench", "--server", "10.0.0.2:6969"]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.server_host, "10.0.0.2");
        assert_eq!(config.server_port, 6969);
    }

    #[test]
    fn test_server_override_rejects_malformed() {
        for bad in ["localhost", "host:notaport", "host:"] {
            let cli = Cli::parse_from(["tftp-bench", "--server", bad]);
            let err = cli.to_config().unwrap_err();
            assert!(matches!(err, HarnessError::InvalidServer(_)), "{bad}");
        }
    }

    #[test]
    fn test_timeout_and_throttle_overrides() {
        let cli = Cli::parse_from(["tftp-bench", "--timeout-secs", "7", "--throttle-ms", "0"]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.transfer_timeout, Duration::from_secs(7));
        assert!(config.throttle.is_zero());
    }

    #[test]
    fn test_defaults_without_overrides() {
        let cli = Cli::parse_from(["tftp-bench"]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 69);
        assert_eq!(config.fixtures_dir, PathBuf::from("fixtures"));
    }
}
