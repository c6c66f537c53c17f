//! One-shot scaffolder for a CI/CD deployment workflow.
//!
//! Running the installer in a git repository seeds `give_inputs.txt`, installs
//! `pre-push` and `pre-commit` hooks (backing up user-owned ones), copies the
//! workflow and config templates, and registers the generated files in
//! `.gitignore`.
//!
//! - **[`core`]**: Pure logic (input rendering, hook state machine, ignore-list
//!   merging). No I/O.
//! - **[`io`]**: Filesystem side effects, config loading, template source.
//!
//! [`install`] and [`status`] coordinate the two to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod install;
pub mod io;
pub mod logging;
pub mod report;
pub mod status;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
