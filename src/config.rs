use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use typeahead_core::filter::{FilterParams, DEFAULT_MIN_QUERY_CHARS};

/// Location checked when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./config/typeahead.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: default_min_query_chars(),
        }
    }
}

fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// JSON file holding an array of `{id, name, contact}` objects.
    /// When unset the reference data set is served. A relative path is
    /// resolved against the directory of the config file it came from.
    #[serde(default)]
    pub records: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    pub fn filter_params(&self) -> FilterParams {
        FilterParams {
            min_query_chars: self.search.min_query_chars,
        }
    }
}

/// Parse and validate a TOML document.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if config.search.min_query_chars == 0 {
        anyhow::bail!("search.min_query_chars must be >= 1");
    }

    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config = parse_config(&content)?;
    if let (Some(records), Some(dir)) = (config.data.records.as_mut(), path.parent()) {
        if records.is_relative() {
            *records = dir.join(&*records);
        }
    }

    Ok(config)
}

/// Load the config named on the command line, or fall back to
/// [`DEFAULT_CONFIG_PATH`] and then to built-in defaults.
///
/// An explicitly named file that does not exist is an error.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                load_config(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}
