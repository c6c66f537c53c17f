//! Test-only fixtures for target repositories and template directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::layout::RepoPaths;
use crate::io::templates::Template;

/// Temporary target directory, deleted on drop.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// A directory with an empty `.git/` (no `hooks/` yet).
    pub fn new() -> Result<Self> {
        let repo = Self::without_git()?;
        fs::create_dir(repo.path().join(".git")).context("create .git")?;
        Ok(repo)
    }

    /// A plain directory that is not a git repository.
    pub fn without_git() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> RepoPaths {
        RepoPaths::new(self.path())
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, rel: &str) -> Result<Vec<u8>> {
        let path = self.path().join(rel);
        fs::read(&path).with_context(|| format!("read {}", path.display()))
    }

    pub fn read_string(&self, rel: &str) -> Result<String> {
        let path = self.path().join(rel);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}

/// Populate `dir` with a full template set whose contents differ from the
/// bundled templates.
pub fn write_template_dir(dir: &Path) -> Result<()> {
    for template in Template::ALL {
        let path = dir.join(template.source_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let contents = format!("#!/bin/sh\n# custom {}\n", template.source_path());
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}
