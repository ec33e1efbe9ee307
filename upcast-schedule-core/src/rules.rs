//! Weekend-avoidance rules for the two monthly dates.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::trace;

use crate::date::last_day_of_month;

/// Check whether `date` falls on a weekend.
///
/// The weekend is Saturday and Sunday, or Friday through Sunday when
/// `include_friday` is set.
pub fn is_weekend(date: NaiveDate, include_friday: bool) -> bool {
    let first_weekend_day = if include_friday {
        Weekday::Fri
    } else {
        Weekday::Sat
    };
    date.weekday().number_from_monday() >= first_weekend_day.number_from_monday()
}

/// Mid-month meeting date for an anchor day (normally the 14th).
///
/// A Saturday or Sunday moves to the Monday that ends that weekend; any other
/// day, Friday included, is kept.
pub fn mid_month_meeting_date(date: NaiveDate) -> NaiveDate {
    if !is_weekend(date, false) {
        return date;
    }

    // Sat -> +2, Sun -> +1
    let days_to_monday = 8 - date.weekday().number_from_monday();
    let monday = date + Days::new(u64::from(days_to_monday));
    trace!(%date, %monday, "mid-month meeting moved off the weekend");
    monday
}

/// End-of-month testing date for the month containing `date`.
///
/// The last day of the month, unless it is a Friday, Saturday or Sunday, in
/// which case the Thursday before it. That Thursday is never more than three
/// days back, so it stays inside the month.
pub fn end_of_month_testing_date(date: NaiveDate) -> NaiveDate {
    let last_day = last_day_of_month(date);
    if !is_weekend(last_day, true) {
        return last_day;
    }

    // Fri -> -1, Sat -> -2, Sun -> -3
    let days_since_thursday =
        last_day.weekday().number_from_monday() - Weekday::Thu.number_from_monday();
    let thursday = last_day - Days::new(u64::from(days_since_thursday));
    trace!(%last_day, %thursday, "end-of-month testing moved before the weekend");
    thursday
}
