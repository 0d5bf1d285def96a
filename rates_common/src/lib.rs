//!
//! Currency rate statistics over a trailing window of daily publications.
//!
//! This crate aggregates:
//! - `error` — unified error type `RatesError` and its `ErrorKind` tags.
//! - `result` — handy `Result<T, RatesError>` alias.
//! - `config` — where to fetch from and how many days to cover.
//! - `dates` — the trailing date window and the service's date format.
//! - `model` — `QuoteRecord` and `Summary`.
//! - `source` — `RateSource` and its blocking HTTP implementation.
//! - `parser` — daily XML documents into records.
//! - `aggregator` — records into a `Summary`.
//! - `pipeline` — the sequential end-to-end run.
#![warn(missing_docs)]
pub mod aggregator;
pub mod config;
pub mod dates;
pub mod error;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod result;
pub mod source;

pub use config::Config;
pub use error::{ErrorKind, RatesError};
pub use result::Result;
