//! Registration of generated artifacts in `.gitignore`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use super::files::{append_file, read_lossy_or_empty};
use crate::core::ignore_list::{append_block, missing_entries};

/// Result of registering ignore entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoreUpdate {
    pub path: PathBuf,
    /// Entries appended by this run, in order.
    pub added: Vec<String>,
    /// The ignore file did not exist before this run.
    pub created: bool,
}

/// Append `entries` to the ignore file at `path`, creating it if absent.
///
/// With `deduplicate`, entries already listed are skipped and nothing is
/// written when every entry is present. Without it, the full list is appended
/// on every call.
pub fn register_ignore_entries<S: AsRef<str>>(
    path: &Path,
    entries: &[S],
    deduplicate: bool,
) -> Result<IgnoreUpdate> {
    let created = !path.exists();
    let existing = read_lossy_or_empty(path)?;

    let added: Vec<&str> = if deduplicate {
        missing_entries(&existing, entries)
    } else {
        entries.iter().map(|entry| entry.as_ref()).collect()
    };

    if added.is_empty() {
        debug!(path = %path.display(), "ignore entries already registered");
        return Ok(IgnoreUpdate {
            path: path.to_path_buf(),
            added: Vec::new(),
            created: false,
        });
    }

    append_file(path, &append_block(&existing, &added))?;
    info!(path = %path.display(), added = added.len(), "ignore entries registered");
    Ok(IgnoreUpdate {
        path: path.to_path_buf(),
        added: added.into_iter().map(String::from).collect(),
        created,
    })
}
