use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};
use crate::utils::expand_user_path;

/// Settings for the jittered webcam + screenshot run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Where webcam pictures go; `~` is expanded
    pub snapshot_dir: String,
    /// Where screenshots go; `~` is expanded
    pub screenshot_dir: String,
    /// Upper bound (inclusive) of the random delay before capturing
    pub max_jitter_secs: u64,
    /// Webcam capture tool
    pub webcam: ToolConfig,
    /// Screenshot tool
    pub screen: ToolConfig,
}

/// An external executable and the arguments placed before the output path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Executable path; `~` is expanded
    pub program: String,
    /// Arguments placed before the output path
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: "~/archive/sousveillance/snapshots".to_string(),
            screenshot_dir: "~/archive/sousveillance/screenshots".to_string(),
            // 0s .. 9m59s
            max_jitter_secs: 10 * 60 - 1,
            webcam: ToolConfig::default_webcam(),
            screen: ToolConfig::default_screen(),
        }
    }
}

impl CaptureConfig {
    /// Expanded webcam directory
    pub fn snapshot_path(&self) -> PathBuf {
        expand_user_path(&self.snapshot_dir)
    }

    /// Expanded screenshot directory
    pub fn screenshot_path(&self) -> PathBuf {
        expand_user_path(&self.screenshot_dir)
    }

    /// Rejects empty programs and directories
    pub fn validate(&self) -> Result<()> {
        for (name, tool) in [("capture.webcam", &self.webcam), ("capture.screen", &self.screen)] {
            if tool.program.trim().is_empty() {
                return Err(DeskError::Config(format!("{}.program must not be empty", name)));
            }
        }
        if self.snapshot_dir.trim().is_empty() || self.screenshot_dir.trim().is_empty() {
            return Err(DeskError::Config("capture directories must not be empty".into()));
        }
        Ok(())
    }
}

impl ToolConfig {
    /// Tool running `program` with `args`
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `imagesnap`, warmed up for one second so exposure can settle
    pub fn default_webcam() -> Self {
        Self::new("~/bin/imagesnap", &["-w", "1.00"])
    }

    /// `screencapture` with cursor, no shadow, no sound, jpg, no delay
    pub fn default_screen() -> Self {
        Self::new("/usr/sbin/screencapture", &["-Cox", "-tjpg", "-T0"])
    }

    /// Expanded program path
    pub fn program_path(&self) -> PathBuf {
        expand_user_path(&self.program)
    }
}
