//! I/O helpers for installer commands.

pub mod config;
pub mod files;
pub mod gitignore;
pub mod hooks;
pub mod layout;
pub mod templates;
