//! tftp-bench - comparative benchmark harness for TFTP implementations
//!
//! This library drives two externally supplied TFTP clients (a
//! reference and a candidate) through identical `get`/`put` transfers
//! over a fixed corpus of random fixtures, timing each transfer. It
//! never speaks the TFTP wire protocol itself; the implementations
//! under test are opaque child processes.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod fixture;
pub mod params;
pub mod report;
pub mod runner;
