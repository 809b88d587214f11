use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tftp_bench::config::HarnessConfig;
use tftp_bench::fixture;
use tracing_subscriber::EnvFilter;

/// One-shot setup step: materialize the fixture corpus. Takes no
/// arguments; run it once before benchmarking.
#[derive(Parser, Debug)]
#[command(name = "mkfixtures")]
#[command(version)]
#[command(about = "Generate the fixed-size random fixture corpus for tftp-bench", long_about = None)]
struct MkfixturesCli {}

fn main() -> Result<()> {
    let _cli = MkfixturesCli::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        process::exit(code);
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = HarnessConfig::default();
    fixture::generate_corpus(&config).context("fixture generation failed")?;
    Ok(())
}
