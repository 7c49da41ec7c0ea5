//! Config file handling

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::CurlpyError;
use crate::history::DEFAULT_MAX_ENTRIES;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CURLPY_CONFIG_DIR";

/// Number of history records listed when `--limit` is not given
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// History settings from the `[history]` table
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryConfig {
    /// Record conversions at all
    pub enabled: bool,
    pub max_entries: usize,
    pub list_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: DEFAULT_MAX_ENTRIES,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// curlpy configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Arguments prepended to every invocation
    pub default_options: Vec<String>,
    pub history: HistoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_dir(Self::default_config_dir())
    }
}

impl Config {
    /// Default settings rooted at the given (or default) config directory
    pub fn defaults_in(config_dir: Option<&Path>) -> Self {
        Self::with_dir(
            config_dir
                .map(Path::to_path_buf)
                .unwrap_or_else(Self::default_config_dir),
        )
    }

    fn with_dir(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            default_options: Vec::new(),
            history: HistoryConfig::default(),
        }
    }

    /// Load configuration from `config.toml` in the given (or default) config directory
    pub fn load(config_dir: Option<&Path>) -> Result<Self, CurlpyError> {
        let config_dir = config_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_dir);
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            debug!(path = %config_file.display(), "No config file, using defaults");
            return Ok(Self::with_dir(config_dir));
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| CurlpyError::Config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.config_dir = config_dir;
        Ok(config)
    }

    /// Parse config TOML; the config directory is left at its default
    pub fn parse(content: &str) -> Result<Self, CurlpyError> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| CurlpyError::Config(format!("Invalid config TOML: {}", e)))?;

        let default_options = table
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        let history = Self::parse_history(table.get("history"))?;

        Ok(Self {
            config_dir: Self::default_config_dir(),
            default_options,
            history,
        })
    }

    fn parse_history(section: Option<&toml::Value>) -> Result<HistoryConfig, CurlpyError> {
        let defaults = HistoryConfig::default();
        let section = match section {
            Some(s) => s,
            None => return Ok(defaults),
        };

        let enabled = section
            .get("enabled")
            .and_then(|v| v.as_bool())
            .unwrap_or(defaults.enabled);

        let max_entries = Self::positive_integer(section, "max_entries")?.unwrap_or(defaults.max_entries);
        let list_limit = Self::positive_integer(section, "list_limit")?.unwrap_or(defaults.list_limit);

        Ok(HistoryConfig {
            enabled,
            max_entries,
            list_limit,
        })
    }

    fn positive_integer(section: &toml::Value, key: &str) -> Result<Option<usize>, CurlpyError> {
        match section.get(key).and_then(|v| v.as_integer()) {
            None => Ok(None),
            Some(n) if n > 0 => Ok(Some(n as usize)),
            Some(n) => Err(CurlpyError::Config(format!(
                "history.{} must be a positive integer, got {}",
                key, n
            ))),
        }
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        dirs::config_dir()
            .map(|p| p.join("curlpy"))
            .unwrap_or_else(|| PathBuf::from(".curlpy"))
    }

    /// Get the history file path
    pub fn history_file(&self) -> PathBuf {
        self.config_dir.join("history.json")
    }
}
