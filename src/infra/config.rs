use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::app::split::{DEFAULT_HORIZONTAL_SPLIT, DEFAULT_VERTICAL_SPLIT, SplitRatio};
use crate::app::workspace::WorkspaceState;

pub const APP_DIR_NAME: &str = "codepane";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Description pane width in percent
    pub horizontal_split: f64,
    /// Editor height in percent of the right column
    pub vertical_split: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_split: DEFAULT_HORIZONTAL_SPLIT,
            vertical_split: DEFAULT_VERTICAL_SPLIT,
        }
    }
}

impl LayoutConfig {
    /// Out-of-range ratios are clamped rather than rejected.
    pub fn workspace(&self) -> WorkspaceState {
        WorkspaceState::new(
            SplitRatio::new(self.horizontal_split),
            SplitRatio::new(self.vertical_split),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    pub run_delay_ms: u64,
    pub submit_delay_ms: u64,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            run_delay_ms: 1000,
            submit_delay_ms: 1500,
        }
    }
}

impl ExecutionConfig {
    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(self.run_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub mouse_capture: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_capture: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub execution: ExecutionConfig,
    pub ui: UiConfig,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// An explicit path must exist. The default path may be absent, which
/// yields the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(AppConfig::default()),
        },
    }
}

pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
