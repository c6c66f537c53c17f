//! Installer configuration (TOML).

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Installer configuration.
///
/// Every field is optional in the file; missing fields fall back to the
/// defaults the installer ships with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InstallConfig {
    /// Keys written to `give_inputs.txt`, one `key: ` line each, in order.
    pub input_keys: Vec<String>,

    /// Suffix appended to a pre-existing hook's name before replacing it.
    pub backup_suffix: String,

    pub ignore: IgnoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Paths registered in `.gitignore`.
    pub entries: Vec<String>,

    /// Only append entries not already listed. When false every run appends
    /// the full list again.
    pub deduplicate: bool,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            entries: [
                "/open_workflow_run",
                "/give_inputs.txt",
                "config.yml",
                "templates/",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            deduplicate: true,
        }
    }
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            input_keys: [
                "github_PAT",
                "tenant_id",
                "workflow",
                "subscription",
                "resource_group",
                "resource",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            backup_suffix: "bkp".to_string(),
            ignore: IgnoreConfig::default(),
        }
    }
}

impl InstallConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_keys.is_empty() {
            return Err(anyhow!("input_keys must not be empty"));
        }
        let mut seen = BTreeSet::new();
        for key in &self.input_keys {
            if key.trim().is_empty() {
                return Err(anyhow!("input_keys must not contain blank keys"));
            }
            if key.contains(['\n', '\r', ':']) {
                return Err(anyhow!(
                    "input key {key:?} must be a single line without ':'"
                ));
            }
            if !seen.insert(key.as_str()) {
                return Err(anyhow!("duplicate input key {key:?}"));
            }
        }

        let suffix = &self.backup_suffix;
        if suffix.is_empty() || suffix.starts_with('.') || suffix.contains(['/', '\\']) {
            return Err(anyhow!(
                "backup_suffix {suffix:?} must be non-empty, without a leading '.' or path separators"
            ));
        }

        for entry in &self.ignore.entries {
            if entry.trim().is_empty() {
                return Err(anyhow!("ignore.entries must not contain blank entries"));
            }
            if entry.contains(['\n', '\r']) {
                return Err(anyhow!("ignore entry {entry:?} must be a single line"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `InstallConfig::default()`.
pub fn load_config(path: &Path) -> Result<InstallConfig> {
    if !path.exists() {
        let cfg = InstallConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: InstallConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
