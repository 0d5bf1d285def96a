//! Command-line arguments for the rates report.
//!
//! All flags are optional; a bare invocation covers the last 90 days of the
//! Central Bank of Russia daily feed. See `main` for end-to-end usage.
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rates_common::config::{Config, DEFAULT_DAYS, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};

/// How the summary is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputFormat {
    /// Three human-readable lines.
    Text,
    /// The summary as a JSON object.
    Json,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of trailing calendar days to collect, today included.
    #[clap(long, default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// Base URL of the daily rates endpoint.
    #[clap(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Per-request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Output format of the summary.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    /// Builds the pipeline configuration from the flags.
    pub fn config(&self) -> Config {
        Config::new(self.url.trim())
            .with_days(self.days)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
