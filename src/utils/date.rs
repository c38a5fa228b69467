//! Calendar utilities: month parsing, weekend rule, day iteration.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::errors::{AppError, AppResult};

/// Parse a `YYYY-MM` month selector into (year, month).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
    Ok((first.year(), first.month()))
}

/// `YYYY-MM` key for a (year, month) pair.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    next.signed_duration_since(first).num_days() as u32
}

/// Saturday or Sunday, by calendar rule.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Three-letter weekday label, as rendered in the calendar header.
pub fn weekday_abbr(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM` of the current month, the default forecast selector.
pub fn current_month_key() -> String {
    let t = today();
    month_key(t.year(), t.month())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
