//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over `[logging].level` when set. Output goes to stderr so
//! that CLI commands can keep stdout for results.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already installed or the level is not a valid
/// filter directive.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    installed.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| anyhow!("Invalid logging.level '{}': {}", config.level, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "typeahead=loud".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(build_filter(&config).is_err());
    }

    #[test]
    fn test_accepts_directives() {
        let config = LoggingConfig {
            level: "warn,typeahead=debug".to_string(),
            format: LogFormat::Json,
        };
        assert!(build_filter(&config).is_ok());
    }
}
