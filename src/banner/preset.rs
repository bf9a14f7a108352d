use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::style::BannerStyle;
use crate::error::{DeskError, Result};

/// Named heading levels, each bound to a fixed [`BannerStyle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// `=` fill framed by `^` and `v` rules
    H1,
    /// `=` fill, label only
    #[default]
    H2,
    /// `-` fill
    H3,
    /// blank fill
    H4,
}

impl Preset {
    /// Every preset, H1 first
    pub const ALL: [Preset; 4] = [Preset::H1, Preset::H2, Preset::H3, Preset::H4];

    /// The style this heading level starts from
    pub fn style(self) -> BannerStyle {
        let base = BannerStyle::default();
        match self {
            Self::H1 => base.top_rule(true).bottom_rule(true),
            Self::H2 => base,
            Self::H3 => base.fill('-'),
            Self::H4 => base.fill(' '),
        }
    }
}

impl FromStr for Preset {
    type Err = DeskError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "h1" => Ok(Self::H1),
            "h2" => Ok(Self::H2),
            "h3" => Ok(Self::H3),
            "h4" => Ok(Self::H4),
            other => Err(DeskError::invalid(format!("unknown preset '{}'", other))),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::Alignment;

    #[test]
    fn only_h1_draws_rules() {
        for preset in Preset::ALL {
            let style = preset.style();
            let framed = preset == Preset::H1;
            assert_eq!(style.top_rule, framed, "{}", preset);
            assert_eq!(style.bottom_rule, framed, "{}", preset);
            assert_eq!(style.width, 80);
            assert_eq!(style.alignment, Alignment::Center);
        }
    }

    #[test]
    fn fills_follow_heading_level() {
        assert_eq!(Preset::H1.style().fill, '=');
        assert_eq!(Preset::H2.style().fill, '=');
        assert_eq!(Preset::H3.style().fill, '-');
        assert_eq!(Preset::H4.style().fill, ' ');
    }

    #[test]
    fn names_round_trip_through_display() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
        assert!("h5".parse::<Preset>().is_err());
    }
}
