#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! desk-utils - small personal desk tools
//!
//! ## Features
//! - Banner comments: pad a label into a fixed-width, `#`-prefixed section
//!   divider, optionally framed by `^`/`v` rules, and copy it to the clipboard
//! - Snapshots: after a random pause, grab a webcam picture and a screenshot
//!   with external tools, named by UTC timestamp
//!
//! ## Usage
//! ```rust
//! use desk_utils::banner::{BannerRequest, Preset};
//!
//! let banner = BannerRequest::new("Helpers").with_preset(Preset::H3).render().unwrap();
//! assert!(banner.middle().contains("<   Helpers   >"));
//! ```

/// Banner comment formatting and heading presets
pub mod banner;
/// Jittered webcam and screenshot capture
pub mod capture;
/// Terminal output helpers for the `desk` binary
pub mod cli;
/// Clipboard sink abstraction
pub mod clipboard;
/// Configuration module for the application
pub mod config;
/// Error handling types and utilities
pub mod error;
/// Logging configuration and utilities
pub mod logging;
/// Path helpers
pub mod utils;

// Re-export common types
pub use banner::{decorate, format_banner, Alignment, Banner, BannerRequest, BannerStyle, Preset};
pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use config::Config;
pub use error::{DeskError, Result};
