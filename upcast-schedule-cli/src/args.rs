//! Cleanup of raw positional arguments.
//!
//! Arguments often arrive wrapped in apostrophes from shell scripts and
//! schedulers, so those are stripped before any value is interpreted.

use tracing::debug;

/// Strip apostrophes; an argument that ends up empty counts as absent.
pub fn strip_apostrophes(raw: Option<&str>) -> Option<String> {
    raw.map(|s| s.replace('\'', ""))
        .filter(|s| !s.trim().is_empty())
}

/// Interpret the period argument, or `None` to use the default.
///
/// Non-numeric values are discarded without error. Fractional values round
/// up and negative values produce no rows.
pub fn parse_period(raw: Option<&str>) -> Option<u32> {
    let cleaned = strip_apostrophes(raw)?;
    let value = cleaned.trim();

    if let Ok(n) = value.parse::<i64>() {
        return Some(n.clamp(0, i64::from(u32::MAX)) as u32);
    }

    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n.ceil().clamp(0.0, f64::from(u32::MAX)) as u32),
        _ => {
            debug!(period = value, "ignoring non-numeric period");
            None
        }
    }
}
