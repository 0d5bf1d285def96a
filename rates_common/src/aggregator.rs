//! Single-pass reduction of quote records into a [`Summary`].
//!
//! The running extremes start from fixed sentinels rather than from the first
//! record, and only a strictly greater (or smaller) value replaces the current
//! extreme, so the earliest record wins ties. The average is taken over every
//! record, i.e. over all (currency, date) observations.
//!
//! The sum feeding the average is of normalized (per-unit) rates, not of the
//! quoted values.
use chrono::NaiveDate;
use log::info;

use crate::error::RatesError;
use crate::model::{QuoteRecord, Summary};
use crate::result::Result;

/// Starting value of the running maximum.
pub const MAX_SENTINEL: f64 = 0.0;
/// Starting value of the running minimum.
pub const MIN_SENTINEL: f64 = 1000.0;

struct Extreme<'a> {
    value: f64,
    holder: Option<&'a QuoteRecord>,
}

impl<'a> Extreme<'a> {
    fn new(sentinel: f64) -> Self {
        Extreme {
            value: sentinel,
            holder: None,
        }
    }

    fn update(&mut self, value: f64, record: &'a QuoteRecord) {
        self.value = value;
        self.holder = Some(record);
    }

    fn finish(self, extreme: &'static str) -> Result<(f64, String, NaiveDate)> {
        let record = self.holder.ok_or(RatesError::OutOfRange { extreme })?;
        Ok((self.value, record.display_name(), record.date()))
    }
}

/// Computes maximum, minimum and average normalized rate over `records`.
///
/// Fails with [`RatesError::EmptyInput`] when there is nothing to average.
pub fn summarize(records: &[QuoteRecord]) -> Result<Summary> {
    if records.is_empty() {
        return Err(RatesError::EmptyInput);
    }

    let mut max = Extreme::new(MAX_SENTINEL);
    let mut min = Extreme::new(MIN_SENTINEL);
    let mut sum = 0.0;

    for record in records {
        let value = record.normalized_rate()?;
        sum += value;

        if value > max.value {
            max.update(value, record);
        }
        if value < min.value {
            min.update(value, record);
        }
    }

    let observations = records.len();
    let average_value = sum / observations as f64;
    let (max_value, max_currency, max_date) = max.finish("maximum")?;
    let (min_value, min_currency, min_date) = min.finish("minimum")?;

    info!("Aggregated {} quotes", observations);
    Ok(Summary {
        max_value,
        max_currency,
        max_date,
        min_value,
        min_currency,
        min_date,
        average_value,
        observations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample() -> Vec<QuoteRecord> {
        vec![
            QuoteRecord::new(day(1), "A", 1, "1,5"),
            QuoteRecord::new(day(2), "B", 10, "8,0"),
            QuoteRecord::new(day(3), "C", 100, "220,0"),
        ]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn known_records_give_known_summary() {
        let summary = summarize(&sample()).unwrap();
        assert!(close(summary.max_value, 2.2));
        assert_eq!(summary.max_currency, "C");
        assert_eq!(summary.max_date, day(3));
        assert!(close(summary.min_value, 0.8));
        assert_eq!(summary.min_currency, "B");
        assert_eq!(summary.min_date, day(2));
        assert!(close(summary.average_value, 1.5));
        assert_eq!(summary.observations, 3);
    }

    #[test]
    fn permutation_keeps_numbers() {
        let mut reversed = sample();
        reversed.reverse();
        let a = summarize(&sample()).unwrap();
        let b = summarize(&reversed).unwrap();
        assert!(close(a.max_value, b.max_value));
        assert!(close(a.min_value, b.min_value));
        assert!(close(a.average_value, b.average_value));
    }

    #[test]
    fn ties_keep_first_occurrence() {
        let records = vec![
            QuoteRecord::new(day(1), "First", 1, "5,0"),
            QuoteRecord::new(day(2), "Second", 1, "5,0"),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.max_currency, "First");
        assert_eq!(summary.max_date, day(1));
        assert_eq!(summary.min_currency, "First");
        assert_eq!(summary.min_date, day(1));
    }

    #[test]
    fn average_counts_every_observation() {
        // Same currency on two dates plus another currency on one date: three units.
        let records = vec![
            QuoteRecord::new(day(1), "A", 1, "1,0"),
            QuoteRecord::new(day(2), "A", 1, "2,0"),
            QuoteRecord::new(day(2), "B", 1, "6,0"),
        ];
        assert!(close(summarize(&records).unwrap().average_value, 3.0));
    }

    #[test]
    fn extremes_report_letter_code_when_known() {
        let records = vec![
            QuoteRecord::new(day(1), "US Dollar", 1, "90,5").with_char_code("USD"),
            QuoteRecord::new(day(1), "Japanese Yen", 100, "60,0").with_char_code("JPY"),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.max_currency, "US Dollar (USD)");
        assert_eq!(summary.min_currency, "Japanese Yen (JPY)");
    }

    #[test]
    fn average_uses_normalized_rates() {
        let records = vec![
            QuoteRecord::new(day(1), "A", 100, "200,0"),
            QuoteRecord::new(day(1), "B", 1, "4,0"),
        ];
        // (2.0 + 4.0) / 2, not (200.0 + 4.0) / 2.
        assert!(close(summarize(&records).unwrap().average_value, 3.0));
    }

    #[test]
    fn empty_input_is_arithmetic_error() {
        let err = summarize(&[]).unwrap_err();
        assert!(matches!(err, RatesError::EmptyInput));
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn zero_denomination_aborts() {
        let mut records = sample();
        records.push(QuoteRecord::new(day(4), "Z", 0, "1,0"));
        let err = summarize(&records).unwrap_err();
        assert!(matches!(err, RatesError::ZeroDenomination { .. }));
    }

    #[test]
    fn value_above_min_sentinel_never_becomes_minimum() {
        let records = vec![
            QuoteRecord::new(day(1), "Huge", 1, "1500,0"),
            QuoteRecord::new(day(2), "Small", 1, "2,0"),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.max_currency, "Huge");
        assert_eq!(summary.min_currency, "Small");
    }

    #[test]
    fn nothing_below_min_sentinel_is_out_of_range() {
        let records = vec![QuoteRecord::new(day(1), "Huge", 1, "1500,0")];
        assert!(matches!(
            summarize(&records),
            Err(RatesError::OutOfRange { extreme: "minimum" })
        ));
    }
}
