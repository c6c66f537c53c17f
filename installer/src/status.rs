//! Read-only inspection for `installer status`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::core::hook_state::HookState;
use crate::core::ignore_list::missing_entries;
use crate::core::inputs::render_input_template;
use crate::install::{InstallOptions, STAGED_TEMPLATES};
use crate::io::files::{is_executable, list_dir, read_lossy_or_empty, read_optional};
use crate::io::hooks::{HOOKS, inspect_hook};
use crate::io::layout::{RepoPaths, backup_name, ensure_git_repository};

/// How a file on disk compares to what `install` would write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileState {
    Missing,
    Matches,
    Differs,
}

impl FileState {
    fn compare(current: Option<&[u8]>, expected: &[u8]) -> Self {
        match current {
            None => FileState::Missing,
            Some(bytes) if bytes == expected => FileState::Matches,
            Some(_) => FileState::Differs,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileState::Missing => "missing",
            FileState::Matches => "matches",
            FileState::Differs => "differs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    pub path: PathBuf,
    pub state: FileState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookStatus {
    pub name: String,
    pub path: PathBuf,
    pub state: HookState,
    /// False when the hook file exists but git would skip it.
    pub executable: bool,
    pub backup_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub root: PathBuf,
    /// `Differs` once the user has filled in values.
    pub inputs: FileStatus,
    pub hooks: Vec<HookStatus>,
    pub files: Vec<FileStatus>,
    pub missing_ignore_entries: Vec<String>,
}

impl StatusReport {
    /// True when `install` would only rewrite the input file.
    pub fn is_installed(&self) -> bool {
        self.hooks
            .iter()
            .all(|hook| hook.state == HookState::Installed && hook.executable)
            && self
                .files
                .iter()
                .all(|file| file.state == FileState::Matches)
            && self.missing_ignore_entries.is_empty()
    }
}

/// Inspect the repository at `root` against `options` without writing.
pub fn inspect(root: &Path, options: &InstallOptions) -> Result<StatusReport> {
    let config = &options.config;
    config.validate()?;

    let paths = RepoPaths::new(root);
    ensure_git_repository(&paths)?;

    let rendered = render_input_template(&config.input_keys);
    let inputs = FileStatus {
        state: FileState::compare(
            read_optional(&paths.inputs_path)?.as_deref(),
            rendered.as_bytes(),
        ),
        path: paths.inputs_path.clone(),
    };

    let listing = list_dir(&paths.hooks_dir)?;
    let mut hooks = Vec::with_capacity(HOOKS.len());
    for hook in HOOKS {
        let bundled = options.templates.load(hook)?;
        let state = inspect_hook(&paths, &listing, hook, &bundled)?;
        let name = hook.hook_name().unwrap_or_else(|| hook.source_path());
        let path = paths.hook_path(name);
        let executable = state == HookState::Absent || is_executable(&path)?;
        hooks.push(HookStatus {
            name: name.to_string(),
            path,
            state,
            executable,
            backup_exists: listing.contains(&backup_name(name, &config.backup_suffix)),
        });
    }

    let mut files = Vec::with_capacity(STAGED_TEMPLATES.len());
    for template in STAGED_TEMPLATES {
        let expected = options.templates.load(template)?;
        let path = paths.destination(template);
        let state = FileState::compare(read_optional(&path)?.as_deref(), &expected);
        files.push(FileStatus { path, state });
    }

    let gitignore = read_lossy_or_empty(&paths.gitignore_path)?;
    let missing_ignore_entries = missing_entries(&gitignore, &config.ignore.entries)
        .into_iter()
        .map(String::from)
        .collect();

    Ok(StatusReport {
        root: paths.root,
        inputs,
        hooks,
        files,
        missing_ignore_entries,
    })
}
