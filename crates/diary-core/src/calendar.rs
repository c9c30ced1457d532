//! Calendar-day helpers.
//!
//! A calendar day is the (year, month, day) of an entry's `date` in UTC.
//! Time of day never takes part in comparisons.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::storage::Entry;

/// The calendar day of a stored timestamp.
pub fn calendar_day(date: &DateTime<Utc>) -> NaiveDate {
    date.date_naive()
}

/// Distinct days that have at least one entry.
pub fn entry_days(entries: &[Entry]) -> BTreeSet<NaiveDate> {
    entries
        .iter()
        .map(|entry| calendar_day(&entry.date))
        .collect()
}

pub fn day_has_entry(days: &BTreeSet<NaiveDate>, day: NaiveDate) -> bool {
    days.contains(&day)
}

/// Days of one month (`year`, `month`) that have entries, in order.
pub fn days_in_month(days: &BTreeSet<NaiveDate>, year: i32, month: u32) -> Vec<NaiveDate> {
    days.iter()
        .copied()
        .filter(|day| day.year() == year && day.month() == month)
        .collect()
}
