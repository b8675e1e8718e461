//! Day/night colour themes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Text and background colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub text: Rgb,
    pub background: Rgb,
}

const DARK: Rgb = Rgb(10, 10, 20);
const LIGHT: Rgb = Rgb(255, 255, 255);

/// Colour theme selected in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background
    #[default]
    Day,
    /// Light text on a dark background
    Night,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Self::Day => Palette {
                text: DARK,
                background: LIGHT,
            },
            Self::Night => Palette {
                text: LIGHT,
                background: DARK,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown theme name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0} (expected \"day\" or \"night\")")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}
