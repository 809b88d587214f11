//! Benchmark parameters: transfer mode and operation
//!
//! The driver historically accepted two, one or zero positional
//! arguments with different defaulting rules. All of those forms funnel
//! through [`BenchParams::resolve`], the single canonical parsing
//! function.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::HarnessError;

/// TFTP transfer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Binary-safe transfer
    Octet,
    /// Line-ending-normalized text transfer
    Netascii,
}

impl Mode {
    /// Wire name, as passed to the clients under test
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Octet => "octet",
            Mode::Netascii => "netascii",
        }
    }
}

impl FromStr for Mode {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "octet" => Ok(Mode::Octet),
            "netascii" => Ok(Mode::Netascii),
            other => Err(HarnessError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Download from server to local disk
    Get,
    /// Upload from local disk to server
    Put,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Put => "put",
        }
    }
}

impl FromStr for Operation {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Operation::Get),
            "put" => Ok(Operation::Put),
            other => Err(HarnessError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable configuration tuple for one driver run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchParams {
    pub mode: Mode,
    pub operation: Operation,
}

impl BenchParams {
    /// Resolve positional arguments into parameters.
    ///
    /// Default rules: no arguments means `octet get`; a lone mode
    /// argument defaults the operation to `get`. Invalid strings are
    /// rejected before any transfer is attempted.
    pub fn resolve(mode: Option<&str>, operation: Option<&str>) -> Result<Self, HarnessError> {
        let mode = match mode {
            Some(s) => s.parse()?,
            None => Mode::Octet,
        };
        let operation = match operation {
            Some(s) => s.parse()?,
            None => Operation::Get,
        };
        Ok(BenchParams { mode, operation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_both() {
        let params = BenchParams::resolve(None, None).unwrap();
        assert_eq!(params.mode, Mode::Octet);
        assert_eq!(params.operation, Operation::Get);
    }

    #[test]
    fn test_resolve_defaults_operation_only() {
        let params = BenchParams::resolve(Some("netascii"), None).unwrap();
        assert_eq!(params.mode, Mode::Netascii);
        assert_eq!(params.operation, Operation::Get);
    }

    #[test]
    fn test_resolve_both_given() {
        let params = BenchParams::resolve(Some("octet"), Some("put")).unwrap();
        assert_eq!(params.mode, Mode::Octet);
        assert_eq!(params.operation, Operation::Put);
    }

    #[test]
    fn test_resolve_rejects_bad_mode() {
        let err = BenchParams::resolve(Some("badmode"), Some("get")).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidMode(ref s) if s == "badmode"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_resolve_rejects_bad_operation() {
        let err = BenchParams::resolve(Some("octet"), Some("delete")).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidOperation(ref s) if s == "delete"));
    }

    #[test]
    fn test_resolve_rejects_uppercase() {
        // Wire names are lowercase only, same as the shell harness
        assert!(BenchParams::resolve(Some("OCTET"), None).is_err());
        assert!(BenchParams::resolve(Some("octet"), Some("GET")).is_err());
    }

    #[test]
    fn test_wire_names_round_trip() {
        assert_eq!(Mode::Netascii.as_str().parse::<Mode>().unwrap(), Mode::Netascii);
        assert_eq!(Operation::Put.as_str().parse::<Operation>().unwrap(), Operation::Put);
    }
}
