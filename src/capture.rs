//! Jittered capture: after a random pause, take a webcam picture and a
//! screenshot with external tools, both named after the current UTC time.
//!
//! Meant to be fired from cron every ten minutes; the jitter keeps the
//! moment of capture unpredictable inside each window.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;
use tokio::process::Command;

use crate::config::{CaptureConfig, ToolConfig};
use crate::error::{DeskError, Result};

/// strftime pattern for capture file names
pub const FILENAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
/// Extension shared by both captures
pub const FILENAME_EXT: &str = "jpg";

/// Runs one external program to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args`, failing on spawn errors or a non-zero exit
    async fn run(&self, program: &Path, args: &[String]) -> Result<()>;
}

/// [`CommandRunner`] spawning real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<()> {
        debug!("running {} {:?}", program.display(), args);
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| DeskError::Capture(format!("failed to start {}: {}", program.display(), e)))?;

        if !output.status.success() {
            return Err(DeskError::Capture(format!(
                "{} exited with {}: {}",
                program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

/// Outcome of one capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRun {
    /// Pause taken before capturing
    pub jitter: Duration,
    /// Timestamped name shared by both files
    pub filename: String,
    /// Webcam picture location
    pub snapshot: PathBuf,
    /// Screenshot location
    pub screenshot: PathBuf,
}

/// File name for a capture taken at `at`
pub fn capture_filename(at: DateTime<Utc>) -> String {
    format!("{}.{}", at.format(FILENAME_FORMAT), FILENAME_EXT)
}

/// Uniform delay in `0..=max_secs` whole seconds
pub fn pick_jitter<R: Rng + ?Sized>(rng: &mut R, max_secs: u64) -> Duration {
    Duration::from_secs(rng.gen_range(0..=max_secs))
}

/// Drives one capture run against a [`CommandRunner`]
pub struct Capturer<R> {
    config: CaptureConfig,
    runner: R,
    jitter: bool,
}

impl<R: CommandRunner> Capturer<R> {
    /// Capturer that pauses before each run
    pub fn new(config: CaptureConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            jitter: true,
        }
    }

    /// Skips the random pause
    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    /// Creates both output directories if missing
    pub async fn ensure_dirs(&self) -> Result<()> {
        for dir in [self.config.snapshot_path(), self.config.screenshot_path()] {
            if !tokio::fs::try_exists(&dir).await? {
                debug!("creating {}", dir.display());
                tokio::fs::create_dir_all(&dir).await?;
            }
        }
        Ok(())
    }

    /// Sleeps for a random jitter, then captures with a name taken from the clock
    pub async fn run(&self) -> Result<CaptureRun> {
        self.ensure_dirs().await?;

        let jitter = if self.jitter {
            pick_jitter(&mut rand::thread_rng(), self.config.max_jitter_secs)
        } else {
            Duration::ZERO
        };
        if !jitter.is_zero() {
            info!("sleeping {}s before capture", jitter.as_secs());
            tokio::time::sleep(jitter).await;
        }

        let mut run = self.capture_as(&capture_filename(Utc::now())).await?;
        run.jitter = jitter;
        Ok(run)
    }

    /// Runs the webcam tool, then the screenshot tool, writing `filename`
    /// into their directories. The screenshot is skipped if the webcam fails.
    pub async fn capture_as(&self, filename: &str) -> Result<CaptureRun> {
        let snapshot = self.config.snapshot_path().join(filename);
        let screenshot = self.config.screenshot_path().join(filename);

        self.invoke(&self.config.webcam, &snapshot).await?;
        info!("webcam snapshot saved to {}", snapshot.display());

        self.invoke(&self.config.screen, &screenshot).await?;
        info!("screenshot saved to {}", screenshot.display());

        Ok(CaptureRun {
            jitter: Duration::ZERO,
            filename: filename.to_string(),
            snapshot,
            screenshot,
        })
    }

    async fn invoke(&self, tool: &ToolConfig, destination: &Path) -> Result<()> {
        let mut args = tool.args.clone();
        args.push(destination.to_string_lossy().into_owned());
        self.runner.run(&tool.program_path(), &args).await
    }
}
