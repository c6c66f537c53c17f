//! Orchestration for `installer install`.
//!
//! Steps run strictly in sequence and the first failure stops the run. There
//! is no rollback: a failed run can leave the repository partially scaffolded.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::core::inputs::render_input_template;
use crate::io::config::InstallConfig;
use crate::io::files::{list_dir, write_file};
use crate::io::gitignore::{IgnoreUpdate, register_ignore_entries};
use crate::io::hooks::{HOOKS, HookOutcome, install_hook};
use crate::io::layout::{RepoPaths, ensure_git_repository};
use crate::io::templates::{Template, TemplateSource, stage};

/// Non-hook templates, in staging order.
pub const STAGED_TEMPLATES: [Template; 3] = [
    Template::OpenWorkflowRun,
    Template::NodeWorkflow,
    Template::Config,
];

/// Options for `install`.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub templates: TemplateSource,
    pub config: InstallConfig,
}

/// A template copied into the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedFile {
    pub template: Template,
    pub path: PathBuf,
}

/// Summary of a completed install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub root: PathBuf,
    pub inputs_path: PathBuf,
    pub hooks: Vec<HookOutcome>,
    pub staged: Vec<StagedFile>,
    pub ignore: IgnoreUpdate,
}

/// Scaffold the deployment workflow into the repository at `root`.
///
/// 1. Write `give_inputs.txt` (overwrites).
/// 2. List `.git/hooks` once, then back up and install each hook.
/// 3. Copy `open_workflow_run`, `templates/node/workflow.yml`, `config.yml`.
/// 4. Register the generated artifacts in `.gitignore`.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn install(root: &Path, options: &InstallOptions) -> Result<InstallReport> {
    let config = &options.config;
    config.validate().context("installer config")?;

    let paths = RepoPaths::new(root);
    ensure_git_repository(&paths)?;
    debug!(templates = ?options.templates, "starting install");

    let inputs = render_input_template(&config.input_keys);
    write_file(&paths.inputs_path, inputs.as_bytes())?;
    info!(path = %paths.inputs_path.display(), keys = config.input_keys.len(), "input file written");

    let listing = list_dir(&paths.hooks_dir)?;
    debug!(entries = listing.len(), "hooks directory listed");
    let mut hooks = Vec::with_capacity(HOOKS.len());
    for hook in HOOKS {
        hooks.push(install_hook(
            &paths,
            &listing,
            hook,
            &options.templates,
            &config.backup_suffix,
        )?);
    }

    let mut staged = Vec::with_capacity(STAGED_TEMPLATES.len());
    for template in STAGED_TEMPLATES {
        let path = paths.destination(template);
        stage(&options.templates, template, &path)?;
        staged.push(StagedFile { template, path });
    }

    let ignore = register_ignore_entries(
        &paths.gitignore_path,
        &config.ignore.entries,
        config.ignore.deduplicate,
    )?;

    info!("install complete");
    Ok(InstallReport {
        root: paths.root,
        inputs_path: paths.inputs_path,
        hooks,
        staged,
        ignore,
    })
}
