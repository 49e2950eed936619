//! Tooltip configuration.
//!
//! Loaded from a TOML file by the embedding application, or assembled in
//! code with the builder methods. Everything has a sensible default; a
//! missing file is not an error at this layer (callers decide whether to
//! fall back to `TooltipConfig::default()`).

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::placement::DEFAULT_CLAMP_WIDTH;

/// Configuration for the tooltip system.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub popup: PopupConfig,
    pub logging: LoggingConfig,
}

/// Popup placement configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Assumed footprint for popups wider than this when clamping against
    /// the container's right edge.
    pub clamp_width: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path; stderr when unset.
    pub log_file: Option<PathBuf>,
    /// Default level when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            popup: PopupConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            clamp_width: DEFAULT_CLAMP_WIDTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            level: "info".to_string(),
        }
    }
}

impl TooltipConfig {
    /// Load configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<TooltipConfig>(&content)?;
        Ok(config)
    }

    /// Set the placement clamp width.
    #[must_use]
    pub fn with_clamp_width(mut self, width: f64) -> Self {
        self.popup.clamp_width = width;
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}
