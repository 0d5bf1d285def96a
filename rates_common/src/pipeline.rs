//! End-to-end run: dates, fetch, parse, aggregate.
//!
//! Everything runs sequentially on the calling thread. The first failure on any
//! date aborts the run; records already collected are discarded.
use chrono::NaiveDate;
use log::{debug, info};

use crate::aggregator::summarize;
use crate::config::Config;
use crate::dates::{format_query_date, last_days};
use crate::model::{QuoteRecord, Summary};
use crate::parser::parse_quotes;
use crate::result::Result;
use crate::source::RateSource;

/// Fetches and parses every date in order, concatenating the records.
pub fn collect_records<S: RateSource + ?Sized>(
    source: &S,
    dates: &[NaiveDate],
) -> Result<Vec<QuoteRecord>> {
    let mut records = Vec::new();
    for &date in dates {
        let body = source.fetch(date)?;
        let quotes = parse_quotes(&body, date)?;
        debug!("{}: {} quotes", format_query_date(date), quotes.len());
        records.extend(quotes);
    }
    Ok(records)
}

/// Runs the pipeline over the trailing `config.days` window ending today.
pub fn run<S: RateSource + ?Sized>(source: &S, config: &Config) -> Result<Summary> {
    info!(
        "Collecting {} days of rates from {}",
        config.days, config.base_url
    );
    let dates = last_days(config.days);
    let records = collect_records(source, &dates)?;
    info!("Collected {} quotes over {} days", records.len(), dates.len());
    summarize(&records)
}
