//! Human-readable rendering of install and status reports.

use std::fmt::Write as _;
use std::path::Path;

use crate::core::hook_state::HookState;
use crate::install::InstallReport;
use crate::status::StatusReport;

/// Printed after a successful install.
pub const NEXT_STEP_HINT: &str =
    "Open config.yml file created in your repository to get started with the deployment.";

pub fn render_install(report: &InstallReport) -> String {
    let root = report.root.as_path();
    let mut out = String::new();
    let _ = writeln!(out, "install: wrote {}", relative(root, &report.inputs_path));
    for hook in &report.hooks {
        let action = match hook.initial {
            HookState::Installed => "unchanged",
            _ => "installed",
        };
        let _ = write!(
            out,
            "install: hook {} {} ({})",
            hook.name,
            action,
            relative(root, &hook.path)
        );
        if let Some(backup) = &hook.backup {
            let _ = write!(out, " backup={}", relative(root, backup));
            if hook.replaced_backup {
                out.push_str(" (replaced older backup)");
            }
        }
        out.push('\n');
    }
    for file in &report.staged {
        let _ = writeln!(out, "install: copied {}", relative(root, &file.path));
    }
    if report.ignore.added.is_empty() {
        let _ = writeln!(
            out,
            "install: {} already lists generated files",
            relative(root, &report.ignore.path)
        );
    } else {
        let _ = writeln!(
            out,
            "install: added to {}: {}",
            relative(root, &report.ignore.path),
            report.ignore.added.join(", ")
        );
    }
    out
}

pub fn render_status(report: &StatusReport) -> String {
    let root = report.root.as_path();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "status: {} {}",
        relative(root, &report.inputs.path),
        report.inputs.state.as_str()
    );
    for hook in &report.hooks {
        let _ = write!(out, "status: hook {} {}", hook.name, hook.state.as_str());
        if !hook.executable {
            out.push_str(" (not executable)");
        }
        if hook.backup_exists {
            out.push_str(" (backup present)");
        }
        out.push('\n');
    }
    for file in &report.files {
        let _ = writeln!(
            out,
            "status: {} {}",
            relative(root, &file.path),
            file.state.as_str()
        );
    }
    if report.missing_ignore_entries.is_empty() {
        out.push_str("status: .gitignore complete\n");
    } else {
        let _ = writeln!(
            out,
            "status: .gitignore missing: {}",
            report.missing_ignore_entries.join(", ")
        );
    }
    let _ = writeln!(
        out,
        "status: {}",
        if report.is_installed() {
            "installed"
        } else {
            "not installed"
        }
    );
    out
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::{InstallOptions, install};
    use crate::status::inspect;
    use crate::test_support::TestRepo;

    #[test]
    fn install_report_mentions_backup_and_paths() {
        let repo = TestRepo::new().expect("repo");
        repo.write(".git/hooks/pre-commit", b"user").expect("hook");

        let report = install(repo.path(), &InstallOptions::default()).expect("install");
        let text = render_install(&report);

        assert!(text.contains("install: wrote give_inputs.txt"));
        assert!(text.contains("hook pre-commit installed"));
        assert!(text.contains("backup=.git/hooks/pre-commit.bkp"));
        assert!(text.contains("install: copied templates/node/workflow.yml"));
        assert!(text.contains("added to .gitignore: /open_workflow_run"));
        assert!(!text.contains(&repo.path().display().to_string()));
    }

    #[test]
    fn status_report_ends_with_verdict() {
        let repo = TestRepo::new().expect("repo");
        let before = inspect(repo.path(), &InstallOptions::default()).expect("inspect");
        assert!(render_status(&before).ends_with("status: not installed\n"));

        install(repo.path(), &InstallOptions::default()).expect("install");
        let after = inspect(repo.path(), &InstallOptions::default()).expect("inspect");
        let text = render_status(&after);
        assert!(text.contains("status: hook pre-push installed"));
        assert!(text.ends_with("status: installed\n"));
    }
}
