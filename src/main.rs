use std::io::Write;
use std::process;

use clap::Parser;
use tftp_bench::cli::{Cli, OutputFormat};
use tftp_bench::driver;
use tftp_bench::error::HarnessError;
use tftp_bench::params::BenchParams;
use tftp_bench::report;
use tftp_bench::runner::{CandidateRunner, ReferenceRunner};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: tftp-bench [octet|netascii] [get|put]";

/// Initialize tracing subscriber; benchmark output stays on stdout
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), HarnessError> {
    let params = BenchParams::resolve(cli.mode.as_deref(), cli.operation.as_deref())?;
    let config = cli.to_config()?;

    let reference = ReferenceRunner::new(&config);
    let candidate = CandidateRunner::new(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let records = driver::run(&config, &params, &reference, &candidate, &mut out)?;

    match cli.format {
        OutputFormat::Text => {}
        OutputFormat::Csv => report::write_csv(&records, &mut out)?,
        OutputFormat::Json => report::write_json(&records, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() {
    // Every usage error exits 1, including clap's own (wrong argument
    // count), matching the shell harness's contract. Help and version
    // requests still exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        process::exit(code);
    });
    init_tracing();

    if let Err(err) = run(&cli) {
        eprintln!("tftp-bench: {err}");
        if err.is_validation() {
            eprintln!("{USAGE}");
        }
        process::exit(1);
    }
}
