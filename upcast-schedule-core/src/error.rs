//! Error types for schedule generation.

use thiserror::Error;

/// Errors that can occur while building or exporting a schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ScheduleError {
    pub(crate) fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ScheduleError::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_message_not_repeated_in_chain() {
        let err = ScheduleError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such directory",
        ));
        assert_eq!(err.to_string(), "no such directory");

        let chain: Vec<String> = std::iter::successors(Some(&err as &dyn std::error::Error), |e| {
            (*e).source()
        })
        .map(|e| e.to_string())
        .collect();
        assert_eq!(
            chain.iter().filter(|m| m.contains("no such directory")).count(),
            1
        );
    }
}
