//! Logging setup driven by the console configuration.

use anyhow::Context;

use super::config::Config;

/// Install the tracing subscriber for the configured level and format.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn setup_telemetry(config: &Config) -> anyhow::Result<()> {
    talent_telemetry::setup_telemetry(&config.telemetry()).context("Failed to initialize logging")
}
