//! Pipeline configuration.
//!
//! Everything the pipeline needs to know about where to fetch from and how far
//! back to look is carried in a [`Config`] value instead of process globals.
use std::time::Duration;

/// Daily rates endpoint of the Central Bank of Russia.
pub const DEFAULT_URL: &str = "http://www.cbr.ru/scripts/XML_daily.asp";
/// Default lookback window, in calendar days.
pub const DEFAULT_DAYS: u32 = 90;
/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the `date_req` query parameter is appended to.
    pub base_url: String,
    /// Number of trailing days to collect, today included.
    pub days: u32,
    /// Timeout applied to each HTTP request.
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration for `base_url` with the default window and timeout.
    pub fn new(base_url: &str) -> Self {
        Config {
            base_url: String::from(base_url),
            ..Config::default()
        }
    }

    /// Sets the lookback window.
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_URL),
            days: DEFAULT_DAYS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
