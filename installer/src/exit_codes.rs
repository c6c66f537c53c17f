//! Stable exit codes for installer CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed (I/O, template, or config error).
pub const FAILED: i32 = 1;
/// The target root has no `.git` directory.
pub const NOT_A_REPOSITORY: i32 = 2;
