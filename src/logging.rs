//! Diagnostic logging
//!
//! Installs a `tracing` subscriber that writes to stderr. The filter comes from
//! `LINEEDIT_LOG` when set (e.g. `LINEEDIT_LOG=lineedit=debug`), otherwise
//! from the `log_level` setting. The changelog is unrelated to this output.

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "LINEEDIT_LOG";

/// Build the filter from the environment, falling back to settings
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(format!("lineedit={}", settings.log_level)))
        .unwrap_or_else(|_| EnvFilter::new("lineedit=warn"))
}

/// Install the global subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
