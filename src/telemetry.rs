//! Tracing subscriber setup for binaries and tests embedding the extractor.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs a global `fmt` subscriber using the configured level and format.
///
/// `log_format` `json` switches to JSON lines; anything else uses the plain
/// text formatter. Calling this when a global subscriber is already set is
/// not an error: the existing subscriber stays in place.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = installed {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }

    Ok(())
}
