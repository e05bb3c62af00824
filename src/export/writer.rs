use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::export::csv::to_csv;
use crate::export::ExportError;
use crate::types::histogram::RankedList;

pub const EXPORT_FILE_NAME: &str = "histogram_data.csv";

/// Writes `dir/histogram_data.csv`, replacing any previous export.
///
/// The content goes to a temporary sibling first and is renamed into place, so
/// readers never observe a partial file.
pub fn write_csv(list: &RankedList, dir: &Path) -> Result<PathBuf, ExportError> {
    if !dir.is_dir() {
        return Err(ExportError::MissingDirectory(dir.to_path_buf()));
    }

    let target = dir.join(EXPORT_FILE_NAME);
    let temp = dir.join(format!("{EXPORT_FILE_NAME}.tmp"));

    // Stale temp file from a crashed previous export
    if temp.exists() {
        fs::remove_file(&temp)?;
    }

    let mut f = fs::File::create(&temp)?;
    f.write_all(to_csv(list).as_bytes())?;
    f.sync_all()?;
    drop(f);

    fs::rename(&temp, &target)?;

    log::info!("exported {} entries to {}", list.len(), target.display());
    Ok(target)
}
