use crate::errors::{AppError, AppResult};
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_format")]
    pub default_format: OutputFormat,
    /// Replaces the page's 月規定労働時間, e.g. "160:00".
    #[serde(default)]
    pub monthly_standard: Option<String>,
    /// Replaces the page's 所定労働日数.
    #[serde(default)]
    pub standard_work_days: Option<u32>,
    #[serde(default = "default_panel_container")]
    pub panel_container: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
fn default_panel_container() -> String {
    "collapseInfo".to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            monthly_standard: None,
            standard_work_days: None,
            panel_container: default_panel_container(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the per-user configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rovertime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rovertime.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path`, creating its directory.
    pub fn init(path: &Path) -> AppResult<Config> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        fs::write(path, config.to_yaml()?).map_err(|_| AppError::ConfigSave)?;

        Ok(config)
    }
}
