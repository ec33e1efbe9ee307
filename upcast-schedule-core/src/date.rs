//! Parsing and calendar arithmetic for plain dates.
//!
//! All dates are `NaiveDate`s. The only place a timezone enters is `today`,
//! which takes the run's timezone explicitly instead of reading the host's.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{ScheduleError, ScheduleResult};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Current calendar date in the given timezone.
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Parse a user-supplied date.
///
/// Accepts `YYYY-MM-DD` (padding optional), `YYYY/MM/DD`, `DD.MM.YYYY`,
/// RFC 3339 and plain ISO datetimes (the date part is kept as written), and
/// the keywords `today` / `now`, which resolve to `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> ScheduleResult<NaiveDate> {
    let s = input.trim();

    if s.eq_ignore_ascii_case("today") || s.eq_ignore_ascii_case("now") {
        return Ok(today);
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt.date());
        }
    }

    Err(ScheduleError::invalid_date(s, "expected YYYY-MM-DD"))
}

/// Build a date from its parts, failing for days that don't exist.
pub fn from_ymd(year: i32, month: u32, day: u32) -> ScheduleResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ScheduleError::invalid_date(format!("{year}-{month:02}-{day:02}"), "no such calendar day")
    })
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last calendar day of `date`'s month, leap years included.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        // Only reachable in the final month chrono can represent
        .unwrap_or(NaiveDate::MAX)
}

/// Add calendar months, clamping the day to the end of a shorter month
/// (`2025-01-31` + 1 → `2025-02-28`).
pub fn add_months(date: NaiveDate, months: u32) -> ScheduleResult<NaiveDate> {
    date.checked_add_months(Months::new(months)).ok_or_else(|| {
        ScheduleError::invalid_date(
            format!("{date} + {months} months"),
            "outside the supported date range",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        let today = ymd(2026, 10, 16);
        assert_eq!(parse_date("2025-03-10", today).unwrap(), ymd(2025, 3, 10));
        assert_eq!(parse_date("2025-3-1", today).unwrap(), ymd(2025, 3, 1));
        assert_eq!(parse_date("2025/03/10", today).unwrap(), ymd(2025, 3, 10));
        assert_eq!(parse_date("10.03.2025", today).unwrap(), ymd(2025, 3, 10));
        assert_eq!(parse_date("  2025-03-10  ", today).unwrap(), ymd(2025, 3, 10));
    }

    #[test]
    fn test_parse_date_keeps_written_date_of_datetimes() {
        let today = ymd(2026, 10, 16);
        assert_eq!(
            parse_date("2025-03-10T23:30:00-05:00", today).unwrap(),
            ymd(2025, 3, 10)
        );
        assert_eq!(parse_date("2025-03-10T08:15:00", today).unwrap(), ymd(2025, 3, 10));
        assert_eq!(parse_date("2025-03-10 08:15:00", today).unwrap(), ymd(2025, 3, 10));
    }

    #[test]
    fn test_parse_date_keywords() {
        let today = ymd(2026, 10, 16);
        assert_eq!(parse_date("today", today).unwrap(), today);
        assert_eq!(parse_date("NOW", today).unwrap(), today);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let today = ymd(2026, 10, 16);
        for input in ["", "next tuesday", "2025-02-30", "2025-13-01", "14/03/2025"] {
            match parse_date(input, today) {
                Err(ScheduleError::InvalidDate { .. }) => {}
                other => panic!("expected InvalidDate for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_ymd() {
        assert_eq!(from_ymd(2028, 2, 29).unwrap(), ymd(2028, 2, 29));
        let err = from_ymd(2027, 2, 29).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date '2027-02-29': no such calendar day"
        );
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(first_day_of_month(ymd(2025, 3, 17)), ymd(2025, 3, 1));
        assert_eq!(last_day_of_month(ymd(2025, 3, 17)), ymd(2025, 3, 31));
        assert_eq!(last_day_of_month(ymd(2025, 4, 1)), ymd(2025, 4, 30));
        assert_eq!(last_day_of_month(ymd(2025, 12, 5)), ymd(2025, 12, 31));
        assert_eq!(last_day_of_month(ymd(2025, 2, 1)), ymd(2025, 2, 28));
        assert_eq!(last_day_of_month(ymd(2028, 2, 1)), ymd(2028, 2, 29));
        assert_eq!(last_day_of_month(ymd(2100, 2, 1)), ymd(2100, 2, 28));
    }

    #[test]
    fn test_add_months_clamps() {
        assert_eq!(add_months(ymd(2025, 1, 31), 1).unwrap(), ymd(2025, 2, 28));
        assert_eq!(add_months(ymd(2024, 1, 31), 1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(add_months(ymd(2025, 1, 31), 2).unwrap(), ymd(2025, 3, 31));
        assert_eq!(add_months(ymd(2025, 11, 15), 3).unwrap(), ymd(2026, 2, 15));
        assert_eq!(add_months(ymd(2025, 6, 10), 0).unwrap(), ymd(2025, 6, 10));
    }

    #[test]
    fn test_add_months_out_of_range() {
        assert!(matches!(
            add_months(NaiveDate::MAX, 1),
            Err(ScheduleError::InvalidDate { .. })
        ));
    }
}
