//! Data model types produced and consumed by the pipeline.
//!
//! - `record` — one quoted rate for one currency on one date.
//! - `summary` — the reduced statistics over all records.
pub mod record;
pub mod summary;

pub use record::QuoteRecord;
pub use summary::Summary;
