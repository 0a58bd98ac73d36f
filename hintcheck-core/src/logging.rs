//! Logging setup using **tracing**.
//!
//! Diagnostics go to stderr so stdout stays clean for tool output; the
//! per-function "checking" events sit at debug level and stay quiet unless
//! asked for.

/// Initializes the global tracing subscriber.
///
/// Call once at the beginning of the application's runtime.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=hintcheck_core=debug`)
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
