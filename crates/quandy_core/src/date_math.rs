//! Month and year navigation plus the month grid used by the calendar.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Deserialize;

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// The seven weekdays in column order.
    pub fn columns(self) -> [Weekday; 7] {
        let mut out = [self.weekday(); 7];
        for idx in 1..7 {
            out[idx] = out[idx - 1].succ();
        }
        out
    }
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn previous_year(year: i32, month: u32) -> (i32, u32) {
    (year - 1, month)
}

pub fn next_year(year: i32, month: u32) -> (i32, u32) {
    (year + 1, month)
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1)?;
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
}

/// Columns between `day` and the start of its week.
fn offset_from_week_start(day: Weekday, start: WeekStart) -> i64 {
    let day = i64::from(day.num_days_from_monday());
    let start = i64::from(start.weekday().num_days_from_monday());
    (day - start).rem_euclid(7)
}

/// Dates of the month padded with neighbouring-month days so the result
/// always covers whole weeks. Empty when the month or its padding falls
/// outside the range chrono can represent.
pub fn month_grid(year: i32, month: u32, week_start: WeekStart) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(len) = days_in_month(year, month) else {
        return Vec::new();
    };
    let Some(last) = first.with_day(len) else {
        return Vec::new();
    };
    let leading = offset_from_week_start(first.weekday(), week_start);
    let trailing = 6 - offset_from_week_start(last.weekday(), week_start);
    let Some(start) = first.checked_sub_signed(Duration::days(leading)) else {
        return Vec::new();
    };
    let cells = (leading + i64::from(len) + trailing) as usize;
    let grid: Vec<NaiveDate> = start.iter_days().take(cells).collect();
    if grid.len() == cells { grid } else { Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_wraps_to_previous_december() {
        assert_eq!(previous_month(2024, 1), (2023, 12));
        assert_eq!(previous_month(2024, 7), (2024, 6));
    }

    #[test]
    fn december_wraps_to_next_january() {
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(next_month(2024, 2), (2024, 3));
    }

    #[test]
    fn year_navigation_keeps_month() {
        assert_eq!(previous_year(2024, 2), (2023, 2));
        assert_eq!(next_year(2024, 2), (2025, 2));
    }

    #[test]
    fn navigation_round_trips_for_every_month() {
        for year in [1999, 2000, 2024, 2100] {
            for month in 1..=12 {
                let (py, pm) = previous_month(year, month);
                assert_eq!(next_month(py, pm), (year, month));
                let (ny, nm) = next_month(year, month);
                assert_eq!(previous_month(ny, nm), (year, month));
                let (ly, lm) = previous_year(year, month);
                assert_eq!(next_year(ly, lm), (year, month));
            }
        }
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn week_start_columns() {
        assert_eq!(WeekStart::Sunday.columns()[0], Weekday::Sun);
        assert_eq!(WeekStart::Sunday.columns()[6], Weekday::Sat);
        assert_eq!(WeekStart::Monday.columns()[0], Weekday::Mon);
        assert_eq!(WeekStart::Monday.columns()[6], Weekday::Sun);
    }

    #[test]
    fn grid_covers_whole_weeks() {
        for week_start in [WeekStart::Sunday, WeekStart::Monday] {
            for month in 1..=12 {
                let grid = month_grid(2024, month, week_start);
                assert_eq!(grid.len() % 7, 0, "month {month}");
                assert_eq!(grid[0].weekday(), week_start.weekday());
                let len = days_in_month(2024, month).expect("valid month");
                let inside = grid.iter().filter(|d| d.month() == month).count();
                assert_eq!(inside as u32, len);
            }
        }
    }

    #[test]
    fn grid_for_february_2024_starting_sunday() {
        let grid = month_grid(2024, 2, WeekStart::Sunday);
        // Feb 1 2024 is a Thursday; Feb 29 is a Thursday.
        assert_eq!(grid.first(), NaiveDate::from_ymd_opt(2024, 1, 28).as_ref());
        assert_eq!(grid.last(), NaiveDate::from_ymd_opt(2024, 3, 2).as_ref());
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn grid_for_invalid_month_is_empty() {
        assert!(month_grid(2024, 0, WeekStart::Sunday).is_empty());
        assert!(month_grid(2024, 13, WeekStart::Monday).is_empty());
    }

    #[test]
    fn last_representable_month_has_length_but_no_grid() {
        // The last representable date is a Monday, so the week cannot be
        // completed under either week start.
        let max = NaiveDate::MAX;
        assert_eq!(max.weekday(), Weekday::Mon);
        assert_eq!(days_in_month(max.year(), 12), Some(31));
        assert!(month_grid(max.year(), 12, WeekStart::Sunday).is_empty());
        assert!(month_grid(max.year(), 12, WeekStart::Monday).is_empty());
        assert_eq!(month_grid(max.year(), 11, WeekStart::Sunday).len() % 7, 0);
    }
}
