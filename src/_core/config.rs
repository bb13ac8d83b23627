//! Command-line configuration with validation at runtime.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use talent_telemetry::TelemetryConfig;

/// Log levels accepted by `--log-level`.
const LOG_LEVELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Recruiting console configuration.
///
/// Global values can be set via environment variables or CLI arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "talent-console",
    about = "Format candidate identifiers and render recruiting API payloads"
)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long, env = "LOG_LEVEL", default_value = "INFO", global = true)]
    pub log_level: String,

    /// Use JSON log format
    #[arg(long, env = "JSON_LOGS", default_value = "false", global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Console subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format a CPF as XXX.XXX.XXX-XX
    Cpf {
        value: String,
        /// Fail instead of echoing values that cannot be formatted
        #[arg(long)]
        strict: bool,
    },
    /// Format a phone number as (XX) XXXX-XXXX or (XX) XXXXX-XXXX
    Telefone {
        value: String,
        /// Fail instead of echoing values that cannot be formatted
        #[arg(long)]
        strict: bool,
    },
    /// Render a paged candidate listing (JSON file, or `-` for stdin)
    Candidatos {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Render a paged job posting listing (JSON file, or `-` for stdin)
    Vagas {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Render the candidates who applied to a posting (JSON file, or `-` for stdin)
    Candidatura {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown log level: {0} (expected one of TRACE, DEBUG, INFO, WARN, ERROR)")]
    InvalidLogLevel(String),
}

impl Config {
    /// Parse and validate configuration.
    ///
    /// # Errors
    /// Returns an error if a configured value is invalid.
    pub fn init() -> anyhow::Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_uppercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// Logging settings for the telemetry crate.
    #[must_use]
    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            log_level: self.log_level.clone(),
            json_logs: self.json_logs,
        }
    }
}
