//! Date parsing and relative date helpers for scheduling.
//!
//! Every helper takes the current time as an argument. Weekdays are counted
//! from Monday (Monday = 0, Sunday = 6), the same convention the categorizer
//! uses for the end of the week.

use super::error::TaskError;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

/// Date format of the scheduled-date line in a detailed task.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default format for custom dates typed during a conversation (DD-MM-YYYY).
pub const DEFAULT_CUSTOM_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a calendar date and returns midnight of that day.
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDateTime, TaskError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, format)
        .map(|date| date.and_time(NaiveTime::default()))
        .map_err(|_| TaskError::InvalidDate(trimmed.to_string()))
}

/// Human-readable form of a chrono date format, e.g. `%d-%m-%Y` -> `DD-MM-YYYY`.
pub fn format_hint(format: &str) -> String {
    format.replace("%d", "DD").replace("%m", "MM").replace("%Y", "YYYY").replace("%y", "YY")
}

/// Checks that `format` can print and read back a date.
pub fn is_valid_format(format: &str) -> bool {
    let probe = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap_or_default();
    let mut rendered = String::new();
    if write!(rendered, "{}", probe.format(format)).is_err() {
        return false;
    }
    NaiveDate::parse_from_str(&rendered, format).map(|parsed| parsed == probe).unwrap_or(false)
}

fn days_from_monday(date: NaiveDate) -> i64 {
    date.weekday().num_days_from_monday() as i64
}

/// The Sunday closing the week that contains `today`.
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    today + Duration::days(6 - days_from_monday(today))
}

pub fn tomorrow(now: NaiveDateTime) -> NaiveDateTime {
    now + Duration::days(1)
}

/// Two days ahead, but never past Sunday.
pub fn later_this_week(now: NaiveDateTime) -> NaiveDateTime {
    let days_to_sunday = 6 - days_from_monday(now.date());
    now + Duration::days(days_to_sunday.min(2))
}

/// The upcoming Monday.
pub fn next_week(now: NaiveDateTime) -> NaiveDateTime {
    now + Duration::days(7 - days_from_monday(now.date()))
}

/// Quick scheduling choices offered on the schedule keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOption {
    Today,
    Tomorrow,
    LaterThisWeek,
    NextWeek,
}

impl ScheduleOption {
    pub const ALL: [ScheduleOption; 4] = [
        ScheduleOption::Today,
        ScheduleOption::Tomorrow,
        ScheduleOption::LaterThisWeek,
        ScheduleOption::NextWeek,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleOption::Today => "Today",
            ScheduleOption::Tomorrow => "Tomorrow",
            ScheduleOption::LaterThisWeek => "Later this week",
            ScheduleOption::NextWeek => "Next week",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|option| option.label().eq_ignore_ascii_case(label))
    }

    pub fn resolve(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self {
            ScheduleOption::Today => now,
            ScheduleOption::Tomorrow => tomorrow(now),
            ScheduleOption::LaterThisWeek => later_this_week(now),
            ScheduleOption::NextWeek => next_week(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::error::ErrorKind;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        day(y, m, d).and_hms_opt(14, 30, 0).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date(" 2024-06-14 ", ISO_DATE_FORMAT).unwrap(), day(2024, 6, 14).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(parse_date("14-06-2024", DEFAULT_CUSTOM_DATE_FORMAT).unwrap().date(), day(2024, 6, 14));
        assert_eq!(parse_date("2024-02-30", ISO_DATE_FORMAT).unwrap_err().kind(), ErrorKind::InvalidDate);
        assert!(parse_date("next friday", ISO_DATE_FORMAT).is_err());
        assert!(parse_date("", ISO_DATE_FORMAT).is_err());
    }

    #[test]
    fn test_format_hint_and_validation() {
        assert_eq!(format_hint(DEFAULT_CUSTOM_DATE_FORMAT), "DD-MM-YYYY");
        assert!(is_valid_format(DEFAULT_CUSTOM_DATE_FORMAT));
        assert!(is_valid_format(ISO_DATE_FORMAT));
        assert!(!is_valid_format("%Q"));
        assert!(!is_valid_format("%d-%m"));
    }

    #[test]
    fn test_end_of_week() {
        // 2024-06-10 is a Monday
        assert_eq!(end_of_week(day(2024, 6, 10)), day(2024, 6, 16));
        assert_eq!(end_of_week(day(2024, 6, 16)), day(2024, 6, 16));
    }

    #[test]
    fn test_later_this_week_caps_at_sunday() {
        assert_eq!(later_this_week(at(2024, 6, 10)).date(), day(2024, 6, 12));
        assert_eq!(later_this_week(at(2024, 6, 15)).date(), day(2024, 6, 16));
        assert_eq!(later_this_week(at(2024, 6, 16)).date(), day(2024, 6, 16));
    }

    #[test]
    fn test_next_week_is_monday() {
        assert_eq!(next_week(at(2024, 6, 10)).date(), day(2024, 6, 17));
        assert_eq!(next_week(at(2024, 6, 16)).date(), day(2024, 6, 17));
    }

    #[test]
    fn test_options_resolve() {
        let now = at(2024, 6, 13);
        assert_eq!(ScheduleOption::Today.resolve(now), now);
        assert_eq!(ScheduleOption::Tomorrow.resolve(now).date(), day(2024, 6, 14));
        assert_eq!(ScheduleOption::from_label("later THIS week"), Some(ScheduleOption::LaterThisWeek));
        assert_eq!(ScheduleOption::from_label("Someday"), None);
    }
}
