/// Number of months generated when no period is given
pub const DEFAULT_PERIOD_MONTHS: u32 = 6;

/// Appended to the `YYMMDD` prefix of the default output file name
pub const DEFAULT_FILE_SUFFIX: &str = "_Upcast_Monthly_Schedule.csv";

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Day of month the mid-month meeting is anchored on
pub const MID_MONTH_DAY: u32 = 14;

pub const HEADER: [&str; 3] = ["Month", "Mid Month Meeting Date", "End of Month Testing Date"];

/// e.g. "Monday, 17.03.2025"
pub const DISPLAY_DATE_FORMAT: &str = "%A, %d.%m.%Y";

/// e.g. "March 2025"
pub const MONTH_LABEL_FORMAT: &str = "%B %Y";

pub const FILE_DATE_PREFIX_FORMAT: &str = "%y%m%d";
