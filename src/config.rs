use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::game::COLS;

/// Longest accepted animation step.
const MAX_TICK_INTERVAL_MS: u64 = 1_000;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub animation: AnimationConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Piece-drop animation timing.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Delay between two rows of a falling piece
    pub tick_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            tick_interval_ms: 50,
        }
    }
}

impl AnimationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on, and returns to after a reset
    pub initial_column: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { initial_column: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log destination for the terminal UI. Nothing is logged when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or `None` if the file does not
    /// exist. Callers fall back to defaults and report the missing file once
    /// logging is set up.
    pub fn load_if_present(path: &Path) -> Result<Option<Self>, ConfigError> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let interval = self.animation.tick_interval_ms;
        if interval == 0 || interval > MAX_TICK_INTERVAL_MS {
            return Err(ConfigError::Validation(format!(
                "animation.tick_interval_ms must be in 1..={MAX_TICK_INTERVAL_MS}"
            )));
        }
        if self.ui.initial_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.initial_column must be < {COLS}"
            )));
        }
        if let Err(e) = crate::logging::parse_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!("logging.level: {e}")));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
