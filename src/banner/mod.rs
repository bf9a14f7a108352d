//! Banner comments: a label decorated as `<   label   >` and padded to a
//! fixed field width, optionally framed by `^`/`v` rule lines.
//!
//! ```text
//! #=========================^                            ^=========================
//! #========================<   Important Section Header   >========================
//! #=========================v                            v=========================
//! ```

mod preset;
mod style;

use std::fmt;
use std::iter;

use log::debug;

use crate::clipboard::ClipboardWriter;
use crate::error::Result;

pub use preset::Preset;
pub use style::{
    parse_fill, parse_width, Alignment, BannerStyle, DEFAULT_FILL, DEFAULT_MARKER, DEFAULT_WIDTH,
};

/// Spaces between the angle brackets and the label
const LABEL_GAP: &str = "   ";
/// Spaces between a rule glyph and the blank field
const RULE_GAP: &str = "  ";

/// Rendered banner, one to three lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    lines: Vec<String>,
    middle: usize,
}

impl Banner {
    /// All lines, top to bottom, without trailing newlines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The line carrying the label
    pub fn middle(&self) -> &str {
        &self.lines[self.middle]
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// A label together with the style to render it in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerRequest {
    /// Text placed between the angle brackets, may be empty
    pub label: String,
    /// Layout applied when rendering
    pub style: BannerStyle,
}

impl BannerRequest {
    /// Request for `label` in the default style
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: BannerStyle::default(),
        }
    }

    /// Replaces the whole style
    pub fn with_style(mut self, style: BannerStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the style with the one bound to `preset`
    pub fn with_preset(self, preset: Preset) -> Self {
        self.with_style(preset.style())
    }

    /// Same as [`format_banner`] on the request's label and style
    pub fn render(&self) -> Result<Banner> {
        format_banner(&self.label, &self.style)
    }
}

/// Formats `label` into a banner.
///
/// The field is `style.width` characters wide; content longer than that is
/// emitted at its natural width. Widths count chars, not bytes.
///
/// # Errors
/// `InvalidArgument` when `style.width` is zero.
pub fn format_banner(label: &str, style: &BannerStyle) -> Result<Banner> {
    style.validate()?;

    let label_len = label.chars().count();
    let mut lines = Vec::with_capacity(3);

    if style.top_rule {
        lines.push(pad_line(&rule('^', label_len), style));
    }
    let middle = lines.len();
    lines.push(pad_line(&format!("<{gap}{label}{gap}>", gap = LABEL_GAP), style));
    if style.bottom_rule {
        lines.push(pad_line(&rule('v', label_len), style));
    }

    Ok(Banner { lines, middle })
}

/// Formats the request and, when `copy` is set, hands the joined text to the
/// clipboard exactly once. Clipboard failures are returned untouched.
pub fn decorate<C>(request: &BannerRequest, copy: bool, clipboard: &mut C) -> Result<Banner>
where
    C: ClipboardWriter + ?Sized,
{
    let banner = request.render()?;
    if copy {
        debug!("copying {} banner line(s) to clipboard", banner.lines().len());
        clipboard.write_text(&banner.to_string())?;
    }
    Ok(banner)
}

fn rule(glyph: char, blank: usize) -> String {
    let mut out = String::with_capacity(blank + 6);
    out.push(glyph);
    out.push_str(RULE_GAP);
    out.extend(iter::repeat(' ').take(blank));
    out.push_str(RULE_GAP);
    out.push(glyph);
    out
}

fn pad_line(content: &str, style: &BannerStyle) -> String {
    let pad = style.width.saturating_sub(content.chars().count());
    let (left, right) = style.alignment.split(pad);

    let mut line = String::with_capacity(style.marker.len() + content.len());
    line.push_str(&style.marker);
    line.extend(iter::repeat(style.fill).take(left));
    line.push_str(content);
    line.extend(iter::repeat(style.fill).take(right));
    line
}
