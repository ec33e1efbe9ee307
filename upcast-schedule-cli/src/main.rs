mod args;
mod commands;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;
use upcast_schedule_core::config::ScheduleConfig;
use upcast_schedule_core::date;
use upcast_schedule_core::schedule::ScheduleRequest;

#[derive(Parser, Debug)]
#[command(name = "upcast-schedule")]
#[command(about = "Export the Upcast mid-month meeting and end-of-month testing dates as CSV")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Start date, e.g. 2025-03-01 (defaults to today)
    #[arg(allow_hyphen_values = true)]
    date: Option<String>,

    /// Output CSV file (defaults to <YYMMDD>_Upcast_Monthly_Schedule.csv)
    #[arg(allow_hyphen_values = true)]
    output_file: Option<String>,

    /// Number of months to generate (defaults to 6; non-numeric values are ignored)
    #[arg(allow_hyphen_values = true)]
    period: Option<String>,

    /// Config file (defaults to ~/.config/upcast-schedule/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Timezone that decides today's date, e.g. "Europe/Sofia"
    #[arg(long)]
    timezone: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = report_error(&mut io::stdout().lock(), &e);
            ExitCode::FAILURE
        }
    }
}

/// Errors are reported on stdout alongside the schedule output.
fn report_error<W: Write>(console: &mut W, err: &anyhow::Error) -> io::Result<()> {
    writeln!(console, "{} {:#}", "Error:".red(), err)?;
    console.flush()
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ScheduleConfig::load_from(path)?,
        None => ScheduleConfig::load()?,
    };
    if let Some(timezone) = cli.timezone {
        config.timezone = timezone;
    }

    // The timezone is fixed once here and only flows through `today` below
    let tz = config.tz()?;
    let today = date::today(tz);
    debug!(tz = tz.name(), %today, "resolved run timezone");

    let request = ScheduleRequest::resolve(
        args::strip_apostrophes(cli.date.as_deref()).as_deref(),
        args::strip_apostrophes(cli.output_file.as_deref()).map(PathBuf::from),
        args::parse_period(cli.period.as_deref()),
        &config,
        today,
    )?;

    commands::export::run(&request)
}
