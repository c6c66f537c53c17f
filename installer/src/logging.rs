//! Diagnostic tracing for the installer.
//!
//! Tracing output goes to stderr and is controlled by `RUST_LOG`. The install
//! and status reports are product output and go to stdout regardless.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset, so replaced hook backups are
/// reported even without configuration.
///
/// # Example
/// ```bash
/// RUST_LOG=installer=debug installer install
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
