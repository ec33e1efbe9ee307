//! CSV export with a tab-delimited console mirror.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::{debug, info};

use crate::constants::HEADER;
use crate::error::ScheduleResult;
use crate::schedule::ScheduleRequest;

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub rows: usize,
}

/// Write the schedule for `request` to its output file, echoing every row to
/// `console`.
///
/// The file is created or truncated. If a row fails part way through, the
/// rows already written stay in the file.
pub fn write_data_to_file<C: Write>(
    request: &ScheduleRequest,
    console: &mut C,
) -> ScheduleResult<ExportSummary> {
    let file = File::create(&request.output_path)?;
    debug!(path = %request.output_path.display(), "opened output file");

    writeln!(console, "Starting Export...")?;
    writeln!(console)?;

    let rows = write_schedule(request, file, console)?;

    writeln!(console)?;
    writeln!(console, "File exported successfully.")?;

    info!(
        path = %request.output_path.display(),
        rows,
        "schedule exported"
    );

    Ok(ExportSummary {
        output_path: request.output_path.clone(),
        rows,
    })
}

/// Write the header and one row per month as CSV to `out` and tab-separated
/// to `console`. Returns the number of data rows.
pub fn write_schedule<W: Write, C: Write>(
    request: &ScheduleRequest,
    out: W,
    console: &mut C,
) -> ScheduleResult<usize> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(HEADER)?;
    writeln!(console, "{}", HEADER.join("\t"))?;

    let mut count = 0;
    for row in request.rows() {
        let fields = row?.fields();
        writer.write_record(&fields)?;
        writeln!(console, "{}", fields.join("\t"))?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}
