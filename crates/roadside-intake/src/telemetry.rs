//! Diagnostic logging for the intake tooling. Events always go to stderr so
//! stdout carries only validation results.

use std::env;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, TelemetryConfig};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("log filter '{directives}' is not valid")]
    Filter {
        directives: String,
        #[source]
        source: ParseError,
    },
    #[error("a global subscriber is already installed")]
    AlreadyInstalled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Filter directives in effect: `RUST_LOG` when set and non-empty, otherwise
/// the configured level.
fn directives(config: &TelemetryConfig, rust_log: Option<String>) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.log_level.clone())
}

/// Install the global subscriber in the configured [`LogFormat`].
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let directives = directives(config, env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directives)
        .map_err(|source| TelemetryError::Filter { directives, source })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let installed = match config.format {
        LogFormat::Compact => builder.without_time().with_target(false).compact().try_init(),
        LogFormat::Full => builder.with_target(true).try_init(),
    };
    installed.map_err(TelemetryError::AlreadyInstalled)?;

    tracing::debug!(format = ?config.format, "telemetry initialized");
    Ok(())
}
