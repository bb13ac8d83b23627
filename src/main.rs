//! talent-console: format CPF and phone values, render recruiting API payloads.

use std::io;

use talent_console::{commands, config::Config, telemetry::setup_telemetry};
use tracing::{debug, error};

/// Build version (injected at compile time)
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    let config = Config::init()?;
    setup_telemetry(&config)?;

    debug!(version = VERSION, command = ?config.command, "Starting talent-console");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&config.command, io::stdin().lock(), &mut out).inspect_err(|e| {
        error!(error = %e, "Command failed");
    })
}
