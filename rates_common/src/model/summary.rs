//! Aggregate statistics over a set of quotes.
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::format_query_date;

/// Extremes and mean of the normalized rates seen in one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Highest normalized rate.
    pub max_value: f64,
    /// Currency that reached `max_value` first.
    pub max_currency: String,
    /// Date of that first occurrence.
    pub max_date: NaiveDate,
    /// Lowest normalized rate.
    pub min_value: f64,
    /// Currency that reached `min_value` first.
    pub min_currency: String,
    /// Date of that first occurrence.
    pub min_date: NaiveDate,
    /// Mean over every (currency, date) observation.
    pub average_value: f64,
    /// Number of observations the mean was taken over.
    pub observations: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Maximum rate: {}, {}, {}",
            self.max_value,
            self.max_currency,
            format_query_date(self.max_date)
        )?;
        writeln!(
            f,
            "Minimum rate: {}, {}, {}",
            self.min_value,
            self.min_currency,
            format_query_date(self.min_date)
        )?;
        write!(f, "Average rate: {}", self.average_value)
    }
}
