//! Template source: the files copied verbatim into the target repository.
//!
//! Templates are bundled into the binary at compile time. A directory with the
//! same layout can replace the bundled set (`--templates <DIR>`).

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::files::{set_executable, write_file};

macro_rules! bundled {
    ($path:literal) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path))
    };
}

const OPEN_WORKFLOW_RUN: &[u8] = bundled!("open_workflow_run");
const PRE_PUSH: &[u8] = bundled!("pre-push");
const PRE_COMMIT: &[u8] = bundled!("pre-commit");
const NODE_WORKFLOW: &[u8] = bundled!("templates/node/workflow.yml");
const CONFIG: &[u8] = bundled!("config.yml");

/// A file shipped with the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    OpenWorkflowRun,
    PrePush,
    PreCommit,
    NodeWorkflow,
    Config,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::OpenWorkflowRun,
        Template::PrePush,
        Template::PreCommit,
        Template::NodeWorkflow,
        Template::Config,
    ];

    /// Path relative to the template source root.
    pub fn source_path(self) -> &'static str {
        match self {
            Template::OpenWorkflowRun => "open_workflow_run",
            Template::PrePush => "pre-push",
            Template::PreCommit => "pre-commit",
            Template::NodeWorkflow => "templates/node/workflow.yml",
            Template::Config => "config.yml",
        }
    }

    /// Git hook name, for templates installed into `.git/hooks`.
    pub fn hook_name(self) -> Option<&'static str> {
        match self {
            Template::PrePush => Some("pre-push"),
            Template::PreCommit => Some("pre-commit"),
            _ => None,
        }
    }

    /// Scripts are staged with the executable bit set.
    pub fn is_executable(self) -> bool {
        matches!(
            self,
            Template::OpenWorkflowRun | Template::PrePush | Template::PreCommit
        )
    }

    fn bundled(self) -> &'static [u8] {
        match self {
            Template::OpenWorkflowRun => OPEN_WORKFLOW_RUN,
            Template::PrePush => PRE_PUSH,
            Template::PreCommit => PRE_COMMIT,
            Template::NodeWorkflow => NODE_WORKFLOW,
            Template::Config => CONFIG,
        }
    }
}

/// Where template bytes are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary.
    #[default]
    Bundled,
    /// A directory laid out like the bundled set.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Read the full contents of `template`.
    pub fn load(&self, template: Template) -> Result<Cow<'static, [u8]>> {
        match self {
            TemplateSource::Bundled => Ok(Cow::Borrowed(template.bundled())),
            TemplateSource::Directory(dir) => {
                let path = dir.join(template.source_path());
                let bytes = fs::read(&path)
                    .with_context(|| format!("read template {}", path.display()))?;
                Ok(Cow::Owned(bytes))
            }
        }
    }
}

/// Copy `template` to `destination`, overwriting unconditionally.
pub fn stage(source: &TemplateSource, template: Template, destination: &Path) -> Result<()> {
    let contents = source.load(template)?;
    write_template(template, &contents, destination)
}

/// Write already-loaded template bytes, setting the executable bit for scripts.
pub fn write_template(template: Template, contents: &[u8], destination: &Path) -> Result<()> {
    write_file(destination, contents)?;
    if template.is_executable() {
        set_executable(destination)?;
    }
    debug!(
        template = template.source_path(),
        destination = %destination.display(),
        bytes = contents.len(),
        "template staged"
    );
    Ok(())
}
