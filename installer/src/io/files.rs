//! Native filesystem helpers shared by the staging steps.
//!
//! Every helper names the operation and path in its error context so a failed
//! run reports exactly which step stopped it.

use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Entry names in `dir`.
///
/// A missing directory is an empty listing: fresh repositories may not have
/// `.git/hooks` yet.
pub fn list_dir(dir: &Path) -> Result<BTreeSet<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "directory missing, empty listing");
            return Ok(BTreeSet::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("list directory {}", dir.display()));
        }
    };

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

pub fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))
}

/// Write `contents` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("write file {}", path.display()))
}

/// Read `path`, returning `None` when it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("read file {}", path.display())),
    }
}

/// Read `path` as text for line comparison, returning an empty string when it
/// does not exist.
///
/// Invalid UTF-8 is replaced rather than rejected: callers only compare lines
/// and append, they never write the decoded text back.
pub fn read_lossy_or_empty(path: &Path) -> Result<String> {
    let bytes = read_optional(path)?.unwrap_or_default();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Rename `from` to `to`, replacing `to` if it exists.
pub fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to)
        .with_context(|| format!("rename {} to {}", from.display(), to.display()))
}

/// Append `contents` to `path`, creating the file if absent.
pub fn append_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {} for append", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("append to {}", path.display()))?;
    file.flush()
        .with_context(|| format!("flush {}", path.display()))
}

/// Mark `path` executable (`0o755`). No-op on platforms without Unix permissions.
#[cfg(unix)]
pub fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("set permissions on {}", path.display()))
}

#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Whether `path` has any executable bit set. Always true without Unix permissions.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    let metadata =
        fs::metadata(path).with_context(|| format!("read metadata {}", path.display()))?;
    Ok(metadata.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> Result<bool> {
    Ok(true)
}
