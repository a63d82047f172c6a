//! Conversions between dates and their display strings.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::DateTextError;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name for a month in 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = month.checked_sub(1)? as usize;
    MONTH_NAMES.get(idx).copied()
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    weekday_label(date.weekday())
}

/// Leading characters of `value`; `0` keeps the whole string.
pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return value;
    }
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// `YYYY<d>MM<d>DD` with zero padding.
pub fn sql_date(year: i32, month: u32, day: u32, delimiter: &str) -> String {
    format!("{year:04}{delimiter}{month:02}{delimiter}{day:02}")
}

fn split_date_parts(text: &str) -> Option<Vec<&str>> {
    let delimiter = if text.contains('/') {
        '/'
    } else if text.contains('-') {
        '-'
    } else {
        return None;
    };
    Some(text.split(delimiter).map(str::trim).collect())
}

/// Parses `YYYY/MM/DD` or `YYYY-MM-DD`.
pub fn string_to_date(text: &str) -> Result<NaiveDate, DateTextError> {
    let trimmed = text.trim();
    let parts = split_date_parts(trimmed)
        .filter(|parts| parts.len() == 3)
        .ok_or_else(|| DateTextError::InvalidFormat(trimmed.to_string()))?;
    let invalid = || DateTextError::InvalidComponent(trimmed.to_string());
    let year: i32 = parts[0].parse().map_err(|_| invalid())?;
    let month: u32 = parts[1].parse().map_err(|_| invalid())?;
    let day: u32 = parts[2].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateTextError::OutOfRange(trimmed.to_string()))
}

/// Signed number of days from `from` to `to`.
pub fn compare_dates(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// `2010/05/20` becomes `May 20, 2010`, or `Ma 20, 2010` with
/// `month_chars == 2`. Text that does not look like a date comes back as
/// given.
pub fn friendly_date(text: &str, month_chars: usize) -> String {
    let Some(parts) = split_date_parts(text).filter(|parts| parts.len() == 3) else {
        return text.to_string();
    };
    let Some(month) = parts[1].parse().ok().and_then(month_name) else {
        return text.to_string();
    };
    let Some(day) = parts[2].parse::<u32>().ok().filter(|day| (1..=31).contains(day)) else {
        return text.to_string();
    };
    format!("{} {}, {}", truncate_chars(month, month_chars), day, parts[0])
}

/// `2010/05` becomes `May, 2010`.
pub fn friendly_month(text: &str) -> String {
    let Some(parts) = split_date_parts(text).filter(|parts| parts.len() == 2) else {
        return text.to_string();
    };
    match parts[1].parse().ok().and_then(month_name) {
        Some(month) => format!("{month}, {}", parts[0]),
        None => text.to_string(),
    }
}
