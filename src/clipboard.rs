//! Clipboard sink.
//!
//! Formatting never touches the clipboard directly; callers hand finished
//! text to a [`ClipboardWriter`]. By default text goes to the native
//! clipboard through `arboard`; a configured command can replace it.

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use arboard::Clipboard;
use log::{debug, info};

use crate::config::ClipboardConfig;
use crate::error::{DeskError, Result};

/// Environment variable holding a whitespace-separated clipboard command
pub const CLIPBOARD_ENV: &str = "DESK_CLIPBOARD";

/// Something that can receive text destined for the clipboard
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardWriter {
    /// Replaces the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Where copied text ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemClipboard {
    /// The platform clipboard, via `arboard`
    Native,
    /// A program (plus arguments) reading the text on stdin
    Command(Vec<String>),
}

impl SystemClipboard {
    /// Uses `command` (program followed by its arguments) verbatim
    pub fn command(command: Vec<String>) -> Result<Self> {
        if command.first().map_or(true, |program| program.trim().is_empty()) {
            return Err(DeskError::Clipboard("clipboard command is empty".into()));
        }
        Ok(Self::Command(command))
    }

    /// Resolution order: `DESK_CLIPBOARD`, the configured command, then the native clipboard
    pub fn from_config(config: &ClipboardConfig) -> Result<Self> {
        if let Ok(raw) = env::var(CLIPBOARD_ENV) {
            let command: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
            debug!("clipboard command from {}: {:?}", CLIPBOARD_ENV, command);
            return Self::command(command);
        }
        match &config.command {
            Some(command) => Self::command(command.clone()),
            None => Ok(Self::Native),
        }
    }

    /// Short name for logs
    pub fn describe(&self) -> String {
        match self {
            Self::Native => "native clipboard".to_string(),
            Self::Command(command) => command.join(" "),
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        match self {
            Self::Native => write_native(text)?,
            Self::Command(command) => write_command(command, text)?,
        }
        info!("copied {} bytes to clipboard via {}", text.len(), self.describe());
        Ok(())
    }
}

fn clipboard_error(e: arboard::Error) -> DeskError {
    DeskError::Clipboard(e.to_string())
}

#[cfg(target_os = "linux")]
fn write_native(text: &str) -> Result<()> {
    use arboard::SetExtLinux;

    // X11/Wayland selections die with their owner; hold them until replaced
    Clipboard::new()
        .map_err(clipboard_error)?
        .set()
        .wait()
        .text(text.to_owned())
        .map_err(clipboard_error)
}

#[cfg(not(target_os = "linux"))]
fn write_native(text: &str) -> Result<()> {
    Clipboard::new()
        .map_err(clipboard_error)?
        .set_text(text.to_owned())
        .map_err(clipboard_error)
}

fn write_command(command: &[String], text: &str) -> Result<()> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| DeskError::Clipboard("clipboard command is empty".into()))?;

    // Programs like xclip fork a server that keeps inherited pipes open, so
    // only the exit status of the direct child is awaited.
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| DeskError::Clipboard(format!("failed to start '{}': {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(text.as_bytes()) {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                return Err(DeskError::Clipboard(format!(
                    "failed to write to '{}': {}",
                    program, e
                )));
            }
            _ => {}
        }
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(DeskError::Clipboard(format!("'{}' exited with {}", program, status)));
    }
    Ok(())
}
