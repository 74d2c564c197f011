//! iterbench binary entry point.
//!
//! Runs the full variant × strategy sweep with the default configuration
//! and prints a grouped summary. An optional first argument gives a path
//! the JSON report is written to.

use iterbench::report::BenchReport;
use iterbench::runner::SweepRunner;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("iterbench v{}", env!("CARGO_PKG_VERSION"));

    let runner = SweepRunner::new();
    let results = match runner.run() {
        Ok(results) => results,
        Err(err) => {
            error!(%err, "benchmark sweep failed");
            return ExitCode::FAILURE;
        }
    };

    let report = BenchReport::from_results("strategy comparison", &results);
    print!("{}", report.summary());

    if let Some(path) = std::env::args().nth(1) {
        if let Err(err) = std::fs::write(&path, report.to_json()) {
            error!(%err, %path, "failed to write JSON report");
            return ExitCode::FAILURE;
        }
        println!("JSON report written to {path}");
    }

    ExitCode::SUCCESS
}
