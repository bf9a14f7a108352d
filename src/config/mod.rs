mod capture;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::banner::{BannerStyle, Preset};
use crate::error::{DeskError, Result};

pub use capture::{CaptureConfig, ToolConfig};

/// Directory name under the platform config dir
pub const APP_DIR: &str = "desk-utils";
/// Config file name inside [`APP_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Main configuration struct for the application
///
/// Every section is optional in the TOML file; missing keys fall back to
/// the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for the `banner` command
    pub banner: BannerDefaults,
    /// Clipboard program selection
    pub clipboard: ClipboardConfig,
    /// Settings for the `snap` command
    pub capture: CaptureConfig,
}

/// Defaults applied to every banner before command-line overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerDefaults {
    /// Heading level used when none is given
    pub preset: Preset,
    /// Field width; the preset's width when unset
    pub width: Option<usize>,
    /// Comment marker; `#` when unset
    pub marker: Option<String>,
    /// Copy to the clipboard instead of printing
    pub copy: bool,
}

/// Clipboard program selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Program and arguments receiving the text on stdin; the native clipboard when unset
    pub command: Option<Vec<String>>,
}

impl Default for BannerDefaults {
    fn default() -> Self {
        Self {
            preset: Preset::H2,
            width: None,
            marker: None,
            copy: false,
        }
    }
}

impl BannerDefaults {
    /// Style for `preset` with the configured width and marker applied
    pub fn style_for(&self, preset: Preset) -> BannerStyle {
        let mut style = preset.style();
        if let Some(width) = self.width {
            style.width = width;
        }
        if let Some(marker) = &self.marker {
            style.marker = marker.clone();
        }
        style
    }
}

impl Config {
    /// Platform location of the config file, e.g. `~/.config/desk-utils/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields
    /// [`Config::default`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("no config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses one TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DeskError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parses TOML text; syntax and type errors become [`DeskError::Config`]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DeskError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Rejects values no command could run with
    pub fn validate(&self) -> Result<()> {
        if self.banner.width == Some(0) {
            return Err(DeskError::Config("banner.width must be positive".into()));
        }
        if let Some(command) = &self.clipboard.command {
            if command.is_empty() {
                return Err(DeskError::Config("clipboard.command must not be empty".into()));
            }
        }
        self.capture.validate()
    }
}
