// ABOUTME: Persists listing records to a timestamp-named CSV file.
// ABOUTME: Columns are title, location, post_date, link; empty input performs no I/O at all.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::ScrapeError;
use crate::result::ListingRecord;

/// `strftime` pattern for the file name timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `<dir>/<prefix>_<timestamp>.csv`
pub fn timestamped_path(dir: &Path, prefix: &str, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("{}_{}.csv", prefix, now.format(TIMESTAMP_FORMAT)))
}

/// Writes `records` with a header row to `path`, replacing any existing file.
pub fn write_csv(records: &[ListingRecord], path: &Path) -> Result<(), ScrapeError> {
    let write_err = |e: &dyn std::fmt::Display| {
        ScrapeError::write(
            path.display().to_string(),
            "WriteCsv",
            Some(anyhow::anyhow!("{}", e)),
        )
    };

    let file = File::create(path).map_err(|e| write_err(&e))?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record).map_err(|e| write_err(&e))?;
    }
    writer.flush().map_err(|e| write_err(&e))?;
    Ok(())
}

/// Saves `records` under `dir` and returns the file written.
///
/// Returns `Ok(None)` without touching the filesystem when there is nothing to save.
pub fn save_to_csv(
    records: &[ListingRecord],
    dir: &Path,
    prefix: &str,
) -> Result<Option<PathBuf>, ScrapeError> {
    if records.is_empty() {
        tracing::warn!("no listings to save");
        return Ok(None);
    }

    fs::create_dir_all(dir).map_err(|e| {
        ScrapeError::write(
            dir.display().to_string(),
            "CreateDir",
            Some(anyhow::anyhow!("{}", e)),
        )
    })?;

    let path = timestamped_path(dir, prefix, Local::now());
    write_csv(records, &path)?;
    tracing::info!(rows = records.len(), path = %path.display(), "saved listings");
    Ok(Some(path))
}
