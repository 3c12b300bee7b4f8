//! Backup-then-rewrite persistence for the corrected text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SpellfixError};
use crate::text::LineStore;

/// The backup path for `path`: the full file name with `.bak` appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Move the original file to `<path>.bak`, then rewrite `path` from the
/// store, one line per record, each newline-terminated.
///
/// A pre-existing backup is a loud failure rather than a silent overwrite,
/// and any failure here is fatal: accepted edits must never be dropped
/// without a diagnostic.
pub fn backup_and_persist(store: &LineStore, path: &Path) -> Result<()> {
    let backup = backup_path(path);
    if backup.exists() {
        return Err(SpellfixError::persistence(format!(
            "backup file already exists: {}",
            backup.display()
        )));
    }

    fs::rename(path, &backup).map_err(|e| {
        SpellfixError::persistence(format!(
            "can't back up {} to {}: {e}",
            path.display(),
            backup.display()
        ))
    })?;

    store.persist(path)
}
