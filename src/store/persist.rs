//! JSON persistence for the hidden-block list.
//!
//! On-disk format: a UTF-8, pretty-printed JSON array of canonical
//! `namespace:path` strings, possibly empty. Writes go through a
//! sibling temp file and a rename so a reader loading concurrently
//! never observes a partially written list.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::observability::Logger;

use super::errors::{StoreError, StoreResult};

/// Reads the persisted list from `path`.
///
/// Returns `Ok(None)` when the file exists but is not a JSON array of
/// strings; the condition is logged and the caller keeps an empty set.
/// I/O failures are returned as errors.
pub(crate) fn read_entries(path: &Path) -> StoreResult<Option<Vec<String>>> {
    let json = fs::read_to_string(path).map_err(|e| StoreError::read_failed(path, e))?;

    match serde_json::from_str::<Vec<String>>(&json) {
        Ok(entries) => Ok(Some(entries)),
        Err(e) => {
            Logger::warn(
                "VEIL_LIST_MALFORMED",
                &[
                    ("path", &path.display().to_string()),
                    ("reason", &e.to_string()),
                ],
            );
            Ok(None)
        }
    }
}

/// Writes `entries` to `path`, creating parent directories as needed.
///
/// The list lands in a temp file in the same directory first and is
/// renamed over the target after an fsync, so the swap is atomic under
/// normal filesystem semantics.
pub(crate) fn write_entries(path: &Path, entries: &[String]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| StoreError::write_failed(path, e))?;
        }
    }

    let json = serde_json::to_string_pretty(entries)?;
    let tmp = tmp_path(path);

    let write_result: std::io::Result<()> = (|| {
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        Ok(())
    })();

    if let Err(e) = write_result {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::write_failed(path, e));
    }

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        StoreError::write_failed(path, e)
    })?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "veil".into());
    name.push(".tmp");
    path.with_file_name(name)
}
