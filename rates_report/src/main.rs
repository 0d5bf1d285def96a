//! Rates Report — collects daily currency rates for a trailing window of days
//! and prints the highest and lowest per-unit rate (with currency and date) and
//! the average rate over all observations.
//!
//! Usage example (CLI):
//! ```bash
//! rates_report --days 30 --format json
//! ```
//!
//! Dates are fetched one by one; any failure is logged and no summary is printed.
#![warn(missing_docs)]
mod args;

use crate::args::{Args, OutputFormat};
use clap::Parser;
use log::error;
use rates_common::model::Summary;
use rates_common::pipeline::run;
use rates_common::source::HttpRateSource;
use rates_common::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match report(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("An error occurred ({}): {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the pipeline and renders the summary; nothing is rendered on failure.
fn report(args: &Args) -> Result<String> {
    let config = args.config();
    let source = HttpRateSource::new(&config)?;
    let summary = run(&source, &config)?;
    render(&summary, args.format)
}

fn render(summary: &Summary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
