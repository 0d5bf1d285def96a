//! Calendar helpers: the trailing window of dates and their query format.
use chrono::{Days, Local, NaiveDate};

/// Day/month/year format expected by the rates service.
pub const QUERY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Returns the last `count` calendar days ending today (local time), oldest first.
pub fn last_days(count: u32) -> Vec<NaiveDate> {
    days_ending(Local::now().date_naive(), count)
}

/// Returns `count` consecutive dates ending at `end` inclusive, oldest first.
///
/// Yields an empty list for `count == 0`. Dates that would fall before the
/// earliest representable day are skipped.
pub fn days_ending(end: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .filter_map(|back| end.checked_sub_days(Days::new(u64::from(back))))
        .collect()
}

/// Formats `date` as `dd/mm/YYYY`.
pub fn format_query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}
