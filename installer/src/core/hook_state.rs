//! Hook installation state machine.
//!
//! ```text
//! absent ───────────────────── write ──────────────┐
//!                                                  ▼
//! present-user-owned ── backup ──> backed-up ── write ──> installed
//! ```
//!
//! A hook whose bytes already equal the bundled hook starts in `installed`,
//! so repeated runs never rename the bundled hook over the user's backup.

use serde::Serialize;

/// Lifecycle state of a single hook name in `.git/hooks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookState {
    /// No file with the hook's name exists.
    Absent,
    /// A file with the hook's name exists and differs from the bundled hook.
    PresentUserOwned,
    /// The user's hook was renamed to its backup name; nothing lives at the hook path.
    BackedUp,
    /// The hook path holds the bundled hook.
    Installed,
}

/// Filesystem action that moves a hook to its next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStep {
    /// Rename the existing hook to `<name>.<suffix>`.
    Backup,
    /// Write the bundled hook to the hook path.
    Write,
}

impl HookState {
    /// Classify a hook from the directory listing and its current contents.
    ///
    /// `current` is only consulted when the hook name is listed.
    pub fn classify(listed: bool, current: Option<&[u8]>, bundled: &[u8]) -> Self {
        if !listed {
            return HookState::Absent;
        }
        match current {
            Some(bytes) if bytes == bundled => HookState::Installed,
            _ => HookState::PresentUserOwned,
        }
    }

    /// Next step toward `Installed` and the state it leads to, or `None` once installed.
    pub fn next_step(self) -> Option<(HookStep, HookState)> {
        match self {
            HookState::Absent => Some((HookStep::Write, HookState::Installed)),
            HookState::PresentUserOwned => Some((HookStep::Backup, HookState::BackedUp)),
            HookState::BackedUp => Some((HookStep::Write, HookState::Installed)),
            HookState::Installed => None,
        }
    }

    /// Steps required to reach `Installed` from this state, in order.
    pub fn plan(self) -> Vec<HookStep> {
        let mut steps = Vec::new();
        let mut state = self;
        while let Some((step, next)) = state.next_step() {
            steps.push(step);
            state = next;
        }
        steps
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HookState::Absent => "absent",
            HookState::PresentUserOwned => "present-user-owned",
            HookState::BackedUp => "backed-up",
            HookState::Installed => "installed",
        }
    }
}
