//! A single currency quote read from a daily rates document.
use chrono::NaiveDate;

use crate::dates::format_query_date;
use crate::error::RatesError;
use crate::result::Result;

/// Rate of one currency on one date, as published.
///
/// The rate is kept in its raw textual form (decimal comma) and only turned
/// into a number by [`QuoteRecord::normalized_rate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    date: NaiveDate,
    currency_name: String,
    char_code: Option<String>,
    denomination: u32,
    raw_rate: String,
}

impl QuoteRecord {
    /// Creates a record.
    pub fn new(date: NaiveDate, currency_name: &str, denomination: u32, raw_rate: &str) -> Self {
        QuoteRecord {
            date,
            currency_name: String::from(currency_name),
            char_code: None,
            denomination,
            raw_rate: String::from(raw_rate),
        }
    }

    /// Attaches the ISO letter code (e.g. `USD`).
    pub fn with_char_code(mut self, char_code: &str) -> Self {
        self.char_code = Some(String::from(char_code));
        self
    }

    /// Date the quote applies to.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Display name of the currency.
    pub fn currency_name(&self) -> &str {
        &self.currency_name
    }

    /// ISO letter code, when the document carried one.
    pub fn char_code(&self) -> Option<&str> {
        self.char_code.as_deref()
    }

    /// Name used in reports: `Name (CODE)` when the letter code is known.
    pub fn display_name(&self) -> String {
        match &self.char_code {
            Some(code) => format!("{} ({})", self.currency_name, code),
            None => self.currency_name.clone(),
        }
    }

    /// Number of currency units the rate is quoted for.
    pub fn denomination(&self) -> u32 {
        self.denomination
    }

    /// Rate as published, e.g. `"52,1234"`.
    pub fn raw_rate(&self) -> &str {
        &self.raw_rate
    }

    /// Rate per single unit of currency: the raw rate divided by the denomination.
    pub fn normalized_rate(&self) -> Result<f64> {
        let rate: f64 = self
            .raw_rate
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| RatesError::InvalidNumber {
                field: "Value",
                value: self.raw_rate.clone(),
            })?;
        if self.denomination == 0 {
            return Err(RatesError::ZeroDenomination {
                currency: self.currency_name.clone(),
                date: format_query_date(self.date),
            });
        }
        Ok(rate / f64::from(self.denomination))
    }
}
