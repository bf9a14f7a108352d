use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};

/// Default field width of a banner line, excluding the comment marker
pub const DEFAULT_WIDTH: usize = 80;
/// Default padding character
pub const DEFAULT_FILL: char = '=';
/// Default comment marker prefixed to every line
pub const DEFAULT_MARKER: &str = "#";

/// Placement of the decorated label inside the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Label flush left, padding on the right
    Left,
    /// Label centered; an odd leftover fill character goes on the right
    #[default]
    Center,
    /// Label flush right, padding on the left
    Right,
}

impl Alignment {
    /// Splits `pad` fill characters into (left, right) counts
    pub fn split(self, pad: usize) -> (usize, usize) {
        match self {
            Self::Left => (0, pad),
            Self::Right => (pad, 0),
            Self::Center => (pad / 2, pad - pad / 2),
        }
    }
}

impl FromStr for Alignment {
    type Err = DeskError;

    /// Accepts the words `left`, `center`/`centre`, `right` and the format-spec
    /// glyphs `<`, `^`, `>`.
    fn from_str(token: &str) -> Result<Self> {
        match token.trim().to_lowercase().as_str() {
            "left" | "<" => Ok(Self::Left),
            "center" | "centre" | "^" => Ok(Self::Center),
            "right" | ">" => Ok(Self::Right),
            other => Err(DeskError::invalid(format!(
                "unsupported alignment '{}' (expected left, center or right)",
                other
            ))),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Styling applied to one banner
///
/// Replaces process-wide default constants: every knob the formatter reads
/// lives here, and presets are just pre-built values of this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerStyle {
    /// Field width of every line, not counting `marker`
    pub width: usize,
    /// Where the label sits inside the field
    pub alignment: Alignment,
    /// Padding character
    pub fill: char,
    /// Draw a `^` rule above the label
    pub top_rule: bool,
    /// Draw a `v` rule below the label
    pub bottom_rule: bool,
    /// Comment marker written before the field
    pub marker: String,
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            alignment: Alignment::Center,
            fill: DEFAULT_FILL,
            top_rule: false,
            bottom_rule: false,
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl BannerStyle {
    /// Sets the field width
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the label placement
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the padding character
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Toggles the `^` rule
    pub fn top_rule(mut self, on: bool) -> Self {
        self.top_rule = on;
        self
    }

    /// Toggles the `v` rule
    pub fn bottom_rule(mut self, on: bool) -> Self {
        self.bottom_rule = on;
        self
    }

    /// Sets the comment marker
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Rejects styles the formatter cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(DeskError::invalid("width must be positive, got 0"));
        }
        Ok(())
    }
}

/// Parses a signed width as typed by a user, rejecting zero and negatives
pub fn parse_width(raw: i64) -> Result<usize> {
    if raw <= 0 {
        return Err(DeskError::invalid(format!("width must be positive, got {}", raw)));
    }
    usize::try_from(raw).map_err(|_| DeskError::invalid(format!("width {} is too large", raw)))
}

/// Parses a fill string that must hold exactly one character
pub fn parse_fill(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DeskError::invalid(format!(
            "fill must be a single character, got {:?}",
            raw
        ))),
    }
}
