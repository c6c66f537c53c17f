//! Paths the installer reads and writes inside a target repository.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use super::templates::Template;

pub const INPUTS_FILE: &str = "give_inputs.txt";
pub const GITIGNORE_FILE: &str = ".gitignore";

/// All canonical paths within a target repository root.
#[derive(Debug, Clone)]
pub struct RepoPaths {
    pub root: PathBuf,
    pub git_dir: PathBuf,
    pub hooks_dir: PathBuf,
    pub inputs_path: PathBuf,
    pub gitignore_path: PathBuf,
}

impl RepoPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let git_dir = root.join(".git");
        Self {
            root: root.clone(),
            git_dir: git_dir.clone(),
            hooks_dir: git_dir.join("hooks"),
            inputs_path: root.join(INPUTS_FILE),
            gitignore_path: root.join(GITIGNORE_FILE),
        }
    }

    /// Where `template` is staged inside the repository.
    pub fn destination(&self, template: Template) -> PathBuf {
        match template.hook_name() {
            Some(name) => self.hook_path(name),
            None => self.root.join(template.source_path()),
        }
    }

    pub fn hook_path(&self, name: &str) -> PathBuf {
        self.hooks_dir.join(name)
    }

    /// `<hooks_dir>/<name>.<suffix>`.
    pub fn backup_path(&self, name: &str, suffix: &str) -> PathBuf {
        self.hooks_dir.join(backup_name(name, suffix))
    }
}

pub fn backup_name(name: &str, suffix: &str) -> String {
    format!("{name}.{suffix}")
}

/// The target root has no `.git` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotARepositoryError {
    pub root: PathBuf,
}

impl fmt::Display for NotARepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "not a git repository: {} has no .git directory (run from the repository root)",
            self.root.display()
        )
    }
}

impl std::error::Error for NotARepositoryError {}

/// Refuse to touch anything unless `root/.git` is a directory.
pub fn ensure_git_repository(paths: &RepoPaths) -> Result<()> {
    if paths.git_dir.is_dir() {
        debug!(git_dir = %paths.git_dir.display(), "git directory found");
        return Ok(());
    }
    Err(NotARepositoryError {
        root: paths.root.clone(),
    }
    .into())
}
