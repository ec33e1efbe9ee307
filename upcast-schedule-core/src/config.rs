//! Schedule configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use crate::constants::{
    DEFAULT_FILE_SUFFIX, DEFAULT_PERIOD_MONTHS, DEFAULT_TIMEZONE, FILE_DATE_PREFIX_FORMAT,
};
use crate::error::{ScheduleError, ScheduleResult};

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_period_months() -> u32 {
    DEFAULT_PERIOD_MONTHS
}

fn default_file_suffix() -> String {
    DEFAULT_FILE_SUFFIX.to_string()
}

/// Configuration at ~/.config/upcast-schedule/config.toml
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScheduleConfig {
    /// IANA timezone that decides what "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_period_months")]
    pub period_months: u32,

    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Directory for the default output file; the working directory if unset
    pub output_dir: Option<PathBuf>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            timezone: default_timezone(),
            period_months: default_period_months(),
            file_suffix: default_file_suffix(),
            output_dir: None,
        }
    }
}

impl ScheduleConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("upcast-schedule");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config from its default location, falling back to defaults
    /// when the file doesn't exist.
    pub fn load() -> ScheduleResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load the config from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScheduleError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&content).map_err(|e| match e {
            ScheduleError::Config(msg) => {
                ScheduleError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> ScheduleResult<Self> {
        let config: ScheduleConfig =
            toml::from_str(content).map_err(|e| ScheduleError::Config(e.to_string()))?;

        // Fail on a bad timezone at load time rather than mid-run
        config.tz()?;
        Ok(config)
    }

    pub fn tz(&self) -> ScheduleResult<Tz> {
        self.timezone.parse::<Tz>().map_err(|e| {
            ScheduleError::Config(format!("Unknown timezone '{}': {e}", self.timezone))
        })
    }

    /// `<YYMMDD><suffix>` for `today`, inside `output_dir` when one is set.
    pub fn default_output_path(&self, today: NaiveDate) -> PathBuf {
        let file_name = format!("{}{}", today.format(FILE_DATE_PREFIX_FORMAT), self.file_suffix);

        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}
