//! Git hook installation with backup of user-owned hooks.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::files::{is_executable, read_optional, rename, set_executable};
use super::layout::{RepoPaths, backup_name};
use super::templates::{Template, TemplateSource, write_template};
use crate::core::hook_state::{HookState, HookStep};

/// Hooks the installer owns, in installation order.
pub const HOOKS: [Template; 2] = [Template::PrePush, Template::PreCommit];

/// What happened to one hook during an install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookOutcome {
    pub name: String,
    pub path: PathBuf,
    /// State observed before any write.
    pub initial: HookState,
    /// Where the user's hook was moved, if it was backed up.
    pub backup: Option<PathBuf>,
    /// An older backup with the same name was replaced.
    pub replaced_backup: bool,
}

/// Classify `hook` without writing anything.
///
/// `listing` is the hooks directory listing taken before any write.
pub fn inspect_hook(
    paths: &RepoPaths,
    listing: &BTreeSet<String>,
    hook: Template,
    bundled: &[u8],
) -> Result<HookState> {
    let name = hook_name(hook)?;
    let path = paths.hook_path(name);
    let listed = listing.contains(name);
    if listed && path.is_dir() {
        return Err(anyhow!(
            "{} is a directory; refusing to replace it with a hook",
            path.display()
        ));
    }
    let current = if listed { read_optional(&path)? } else { None };
    Ok(HookState::classify(listed, current.as_deref(), bundled))
}

/// Drive `hook` to `Installed`, backing up a user-owned hook first.
///
/// The backup rename completes (or fails the run) before the bundled hook is
/// written, so a user's hook is never overwritten in place.
#[instrument(skip_all, fields(hook = hook.source_path()))]
pub fn install_hook(
    paths: &RepoPaths,
    listing: &BTreeSet<String>,
    hook: Template,
    source: &TemplateSource,
    backup_suffix: &str,
) -> Result<HookOutcome> {
    let name = hook_name(hook)?;
    let path = paths.hook_path(name);
    let bundled = source.load(hook)?;
    let initial = inspect_hook(paths, listing, hook, &bundled)?;
    debug!(state = initial.as_str(), "hook classified");

    let mut outcome = HookOutcome {
        name: name.to_string(),
        path: path.clone(),
        initial,
        backup: None,
        replaced_backup: false,
    };

    for step in initial.plan() {
        match step {
            HookStep::Backup => {
                let backup = paths.backup_path(name, backup_suffix);
                if listing.contains(&backup_name(name, backup_suffix)) {
                    warn!(
                        backup = %backup.display(),
                        "replacing existing hook backup"
                    );
                    outcome.replaced_backup = true;
                }
                rename(&path, &backup)?;
                info!(backup = %backup.display(), "existing hook backed up");
                outcome.backup = Some(backup);
            }
            HookStep::Write => {
                write_template(hook, &bundled, &path)?;
                info!(path = %path.display(), "hook installed");
            }
        }
    }

    // Git skips hooks without the executable bit.
    if initial == HookState::Installed && !is_executable(&path)? {
        set_executable(&path)?;
        info!(path = %path.display(), "hook made executable");
    }
    Ok(outcome)
}

fn hook_name(template: Template) -> Result<&'static str> {
    template
        .hook_name()
        .ok_or_else(|| anyhow!("{} is not a hook template", template.source_path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::files::list_dir;
    use std::fs;

    const SUFFIX: &str = "bkp";

    fn repo() -> (tempfile::TempDir, RepoPaths) {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(temp.path().join(".git/hooks")).expect("mkdir hooks");
        let paths = RepoPaths::new(temp.path());
        (temp, paths)
    }

    fn bundled(hook: Template) -> Vec<u8> {
        TemplateSource::Bundled.load(hook).expect("load").into_owned()
    }

    #[test]
    fn absent_hook_is_written_without_backup() {
        let (_temp, paths) = repo();
        let listing = list_dir(&paths.hooks_dir).expect("list");

        let outcome = install_hook(
            &paths,
            &listing,
            Template::PrePush,
            &TemplateSource::Bundled,
            SUFFIX,
        )
        .expect("install");

        assert_eq!(outcome.initial, HookState::Absent);
        assert!(outcome.backup.is_none());
        assert_eq!(
            fs::read(paths.hook_path("pre-push")).expect("read"),
            bundled(Template::PrePush)
        );
        assert!(!paths.backup_path("pre-push", SUFFIX).exists());
    }

    #[test]
    fn user_hook_is_backed_up_then_replaced() {
        let (_temp, paths) = repo();
        fs::write(paths.hook_path("pre-commit"), "#!/bin/sh\ncargo fmt --check\n")
            .expect("write user hook");
        let listing = list_dir(&paths.hooks_dir).expect("list");

        let outcome = install_hook(
            &paths,
            &listing,
            Template::PreCommit,
            &TemplateSource::Bundled,
            SUFFIX,
        )
        .expect("install");

        let backup = paths.backup_path("pre-commit", SUFFIX);
        assert_eq!(outcome.initial, HookState::PresentUserOwned);
        assert_eq!(outcome.backup.as_deref(), Some(backup.as_path()));
        assert!(!outcome.replaced_backup);
        assert_eq!(
            fs::read_to_string(&backup).expect("read backup"),
            "#!/bin/sh\ncargo fmt --check\n"
        );
        assert_eq!(
            fs::read(paths.hook_path("pre-commit")).expect("read"),
            bundled(Template::PreCommit)
        );
    }

    #[test]
    fn installed_hook_keeps_existing_backup() {
        let (_temp, paths) = repo();
        let backup = paths.backup_path("pre-commit", SUFFIX);
        fs::write(&backup, "user original").expect("write backup");
        fs::write(paths.hook_path("pre-commit"), bundled(Template::PreCommit))
            .expect("write installed hook");
        let listing = list_dir(&paths.hooks_dir).expect("list");

        let outcome = install_hook(
            &paths,
            &listing,
            Template::PreCommit,
            &TemplateSource::Bundled,
            SUFFIX,
        )
        .expect("install");

        assert_eq!(outcome.initial, HookState::Installed);
        assert!(outcome.backup.is_none());
        assert_eq!(fs::read_to_string(&backup).expect("read"), "user original");
    }

    #[cfg(unix)]
    #[test]
    fn installed_hook_without_exec_bit_is_made_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, paths) = repo();
        let path = paths.hook_path("pre-commit");
        fs::write(&path, bundled(Template::PreCommit)).expect("write hook");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");
        let listing = list_dir(&paths.hooks_dir).expect("list");

        let outcome = install_hook(
            &paths,
            &listing,
            Template::PreCommit,
            &TemplateSource::Bundled,
            SUFFIX,
        )
        .expect("install");

        assert_eq!(outcome.initial, HookState::Installed);
        assert!(outcome.backup.is_none());
        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn second_user_hook_replaces_old_backup() {
        let (_temp, paths) = repo();
        let backup = paths.backup_path("pre-push", SUFFIX);
        fs::write(&backup, "older").expect("write backup");
        fs::write(paths.hook_path("pre-push"), "newer").expect("write hook");
        let listing = list_dir(&paths.hooks_dir).expect("list");

        let outcome = install_hook(
            &paths,
            &listing,
            Template::PrePush,
            &TemplateSource::Bundled,
            SUFFIX,
        )
        .expect("install");

        assert!(outcome.replaced_backup);
        assert_eq!(fs::read_to_string(&backup).expect("read"), "newer");
    }

    #[test]
    fn hook_named_directory_is_refused() {
        let (_temp, paths) = repo();
        fs::create_dir(paths.hook_path("pre-push")).expect("mkdir");
        let listing = list_dir(&paths.hooks_dir).expect("list");

        let err = install_hook(
            &paths,
            &listing,
            Template::PrePush,
            &TemplateSource::Bundled,
            SUFFIX,
        )
        .unwrap_err();
        assert!(err.to_string().contains("is a directory"));
        assert!(!paths.backup_path("pre-push", SUFFIX).exists());
    }

    #[test]
    fn non_hook_template_is_rejected() {
        let (_temp, paths) = repo();
        let listing = BTreeSet::new();
        let err = install_hook(
            &paths,
            &listing,
            Template::Config,
            &TemplateSource::Bundled,
            SUFFIX,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a hook template"));
    }

    #[cfg(unix)]
    #[test]
    fn installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, paths) = repo();
        install_hook(
            &paths,
            &BTreeSet::new(),
            Template::PreCommit,
            &TemplateSource::Bundled,
            SUFFIX,
        )
        .expect("install");
        let mode = fs::metadata(paths.hook_path("pre-commit"))
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
