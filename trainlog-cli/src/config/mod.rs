use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use trainlog::{ChartRange, LoadSettings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub load: LoadSettings,

    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub week_starts_on_monday: bool,

    /// Bucket in UTC instead of the system time zone
    #[serde(default)]
    pub utc: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub default_range: ChartRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_sessions_file")]
    pub sessions_file: PathBuf,
}

// Default value functions
fn default_sessions_file() -> PathBuf {
    Config::config_dir()
        .map(|dir| dir.join("sessions.json"))
        .unwrap_or_else(|_| PathBuf::from("sessions.json"))
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_starts_on_monday: false,
            utc: false,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_range: ChartRange::Weeks,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            sessions_file: default_sessions_file(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.trainlog/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".trainlog"))
    }

    /// Get default config file path (~/.trainlog/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file(),
        }
    }

    /// Load configuration; a missing file yields defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = Self::resolve_path(path)?;

        if !config_file.exists() {
            tracing::info!("Config file not found at {:?}, using defaults", config_file);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file {}", config_file.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        tracing::debug!("Loaded config from {:?}", config_file);
        Ok(config)
    }

    /// Save configuration to file, creating parent directories
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_file = Self::resolve_path(path)?;

        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(config_file)
    }
}
