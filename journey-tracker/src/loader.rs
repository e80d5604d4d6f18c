//! Stop catalog loader.
//!
//! Parses the bundled stops file into a [`StopCatalog`]. The text format
//! is one record per line, fields comma-separated:
//!
//! ```text
//! cityName,visaRequirement,distanceKm,timeHours
//! ```
//!
//! There is no header row and no quoting, so a field cannot itself
//! contain a comma.
//!
//! Parsing is deliberately lenient: a line that does not split into
//! exactly four fields is dropped without error, and a numeric field
//! that fails to parse defaults to `0.0`. Garbage in the stops file
//! never aborts a load. File I/O is the one exception — an unreadable
//! file is reported as a [`LoadError`] rather than silently yielding an
//! empty itinerary.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{StopCatalog, StopRecord};

/// Errors from loading a stops file.
///
/// Only I/O can fail; malformed content is handled by the lenient parse
/// policy and never surfaces as an error.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The stops file could not be read.
    #[error("failed to read stops file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses stops from raw text, one record per line.
///
/// Lines that do not split into exactly four comma-separated fields are
/// skipped. String fields are trimmed; numeric fields default to `0.0`
/// when unparseable. Output order matches input line order.
pub fn parse_stops(raw: &str) -> StopCatalog {
    let mut stops = Vec::new();

    for (line_no, line) in raw.lines().enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        let [city, visa, distance, time] = fields.as_slice() else {
            debug!(
                line = line_no + 1,
                fields = fields.len(),
                "skipping stops line without exactly 4 fields"
            );
            continue;
        };

        stops.push(StopRecord::new(
            city.trim(),
            visa.trim(),
            parse_f64_or_zero(distance),
            parse_f64_or_zero(time),
        ));
    }

    StopCatalog::new(stops)
}

/// Reads and parses a stops file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read. Malformed
/// content does not error; see [`parse_stops`].
pub fn load_stops_file(path: impl AsRef<Path>) -> Result<StopCatalog, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_stops(&raw);
    debug!(path = %path.display(), stops = catalog.len(), "loaded stop catalog");
    Ok(catalog)
}

fn parse_f64_or_zero(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}
