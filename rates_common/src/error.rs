//! Error types shared between the library and the report binary.
//!
//! `RatesError` unifies every failure the pipeline can hit: reaching the remote
//! source, reading its documents, and reducing the records. Each variant is
//! tagged with an [`ErrorKind`] so callers can tell the categories apart.
use strum_macros::Display;
use thiserror::Error;

/// Coarse category of a [`RatesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    /// The remote source could not be reached or answered badly.
    Connectivity,
    /// A document or value could not be read.
    Parse,
    /// The reduction could not be computed.
    Arithmetic,
}

/// Unified error type for the rates workspace.
#[derive(Error, Debug)]
pub enum RatesError {
    /// Request timed out or the connection could not be established.
    #[error("Connectivity error for {url}: {source}")]
    Connectivity {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Any other failure of the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote source answered with a non-success status.
    #[error("Unexpected HTTP status {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code returned by the server.
        status: u16,
    },

    /// The response body is not a well-formed rates document.
    #[error("XML error: {0}")]
    Xml(#[from] xml::reader::Error),

    /// A currency entry lacks one of its required sub-elements.
    #[error("Currency entry #{index} has no <{tag}> element")]
    MissingField {
        /// Tag name that was looked up.
        tag: &'static str,
        /// Position of the entry within its document.
        index: usize,
    },

    /// A numeric field could not be parsed.
    #[error("Invalid {field} value: {value:?}")]
    InvalidNumber {
        /// Field being parsed (e.g. `Nominal`).
        field: &'static str,
        /// Offending raw text.
        value: String,
    },

    /// Failure while encoding the summary as JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// No records to aggregate; the average is undefined.
    #[error("Division by zero: no quotes to aggregate")]
    EmptyInput,

    /// A record quotes its rate for zero units.
    #[error("Division by zero: {currency} has denomination 0 on {date}")]
    ZeroDenomination {
        /// Currency display name.
        currency: String,
        /// Date of the offending record, `dd/mm/YYYY`.
        date: String,
    },

    /// No normalized rate fell inside the sentinel bounds for this extreme.
    #[error("No {extreme} rate found within the expected range")]
    OutOfRange {
        /// Either `maximum` or `minimum`.
        extreme: &'static str,
    },
}

impl RatesError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RatesError::Connectivity { .. } | RatesError::Http(_) | RatesError::Status { .. } => {
                ErrorKind::Connectivity
            }
            RatesError::Xml(_)
            | RatesError::MissingField { .. }
            | RatesError::InvalidNumber { .. }
            | RatesError::Json(_) => ErrorKind::Parse,
            RatesError::EmptyInput
            | RatesError::ZeroDenomination { .. }
            | RatesError::OutOfRange { .. } => ErrorKind::Arithmetic,
        }
    }
}
