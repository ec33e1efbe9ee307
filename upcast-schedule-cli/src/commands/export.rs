use std::io;

use anyhow::{Context, Result};
use tracing::debug;
use upcast_schedule_core::export;
use upcast_schedule_core::schedule::ScheduleRequest;

pub fn run(request: &ScheduleRequest) -> Result<()> {
    debug!(?request, "exporting schedule");

    let stdout = io::stdout();
    let mut console = stdout.lock();

    export::write_data_to_file(request, &mut console).with_context(|| {
        format!(
            "Could not export schedule to {}",
            request.output_path.display()
        )
    })?;

    Ok(())
}
