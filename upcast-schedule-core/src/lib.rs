//! Core logic for the Upcast monthly schedule.
//!
//! This crate provides everything the CLI needs to produce the schedule:
//! - `rules` for the weekend predicate and the two monthly date rules
//! - `schedule` for the run request and the rows generated from it
//! - `export` for writing the CSV file and its console mirror
//! - `date` for parsing and month arithmetic
//! - `config` for the optional config file
//! - `constants` and `error` for shared defaults and error types

pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod export;
pub mod rules;
pub mod schedule;

pub use error::{ScheduleError, ScheduleResult};
