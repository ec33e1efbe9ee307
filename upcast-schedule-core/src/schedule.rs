//! Schedule request and the rows generated from it.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use crate::config::ScheduleConfig;
use crate::constants::{DISPLAY_DATE_FORMAT, MID_MONTH_DAY, MONTH_LABEL_FORMAT};
use crate::date;
use crate::error::ScheduleResult;
use crate::rules;

/// Effective parameters of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub start_date: NaiveDate,
    pub output_path: PathBuf,
    pub period_months: u32,
}

impl ScheduleRequest {
    /// Fill in defaults from `config` for anything the caller left out.
    ///
    /// `today` drives both the default start date and the `YYMMDD` prefix of
    /// the default file name, so it must already be in the run's timezone.
    pub fn resolve(
        date: Option<&str>,
        output_path: Option<PathBuf>,
        period_months: Option<u32>,
        config: &ScheduleConfig,
        today: NaiveDate,
    ) -> ScheduleResult<Self> {
        let start_date = match date {
            Some(s) => date::parse_date(s, today)?,
            None => today,
        };

        Ok(ScheduleRequest {
            start_date,
            output_path: output_path.unwrap_or_else(|| config.default_output_path(today)),
            period_months: period_months.unwrap_or(config.period_months),
        })
    }

    /// The generated month for each row: the start date plus `i` months.
    pub fn months(&self) -> impl Iterator<Item = ScheduleResult<NaiveDate>> + '_ {
        (0..self.period_months).map(|i| date::add_months(self.start_date, i))
    }

    pub fn rows(&self) -> impl Iterator<Item = ScheduleResult<ScheduleRow>> + '_ {
        self.months()
            .map(|month| month.and_then(ScheduleRow::for_month))
    }
}

/// One month of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    /// First day of the month this row covers
    pub month: NaiveDate,
    pub mid_month_meeting_date: NaiveDate,
    pub end_of_month_testing_date: NaiveDate,
}

impl ScheduleRow {
    /// Compute both dates for the month containing `month`.
    ///
    /// The dates are rebuilt from year and month alone, so the day of `month`
    /// is irrelevant.
    pub fn for_month(month: NaiveDate) -> ScheduleResult<Self> {
        let month_start = date::from_ymd(month.year(), month.month(), 1)?;
        let meeting_anchor = date::from_ymd(month.year(), month.month(), MID_MONTH_DAY)?;

        Ok(ScheduleRow {
            month: month_start,
            mid_month_meeting_date: rules::mid_month_meeting_date(meeting_anchor),
            end_of_month_testing_date: rules::end_of_month_testing_date(month_start),
        })
    }

    /// e.g. "March 2025"
    pub fn month_label(&self) -> String {
        self.month.format(MONTH_LABEL_FORMAT).to_string()
    }

    /// Month label and both formatted dates, in column order.
    pub fn fields(&self) -> [String; 3] {
        [
            self.month_label(),
            format_display_date(self.mid_month_meeting_date),
            format_display_date(self.end_of_month_testing_date),
        ]
    }
}

/// e.g. "Monday, 17.03.2025"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
