use std::{fmt::Display, str::FromStr};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::EngineError;

lazy_static::lazy_static! {
    static ref HEX_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// An opaque RGB color. Serialized as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const NEON_GREEN: Color = Color::new(0x39, 0xFF, 0x14);
    pub const CYAN: Color = Color::new(0x00, 0xF5, 0xFF);
    pub const MAGENTA: Color = Color::new(0xFF, 0x00, 0xFF);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::new(0x0B, 0x0B, 0x0B);
    pub const DEEP_GREY: Color = Color::new(0x1A, 0x1A, 0x1A);

    /// Named foreground choices offered to the user.
    pub const FOREGROUNDS: [(&'static str, Color); 4] = [
        ("neon-green", Color::NEON_GREEN),
        ("cyan", Color::CYAN),
        ("magenta", Color::MAGENTA),
        ("white", Color::WHITE),
    ];

    /// Named background choices offered to the user.
    pub const BACKGROUNDS: [(&'static str, Color); 2] = [("black", Color::BLACK), ("deep-grey", Color::DEEP_GREY)];

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rrggbb` or `rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidColor`] if `hex` isn't a six digit hex color.
    pub fn from_hex(hex: &str) -> crate::Result<Self> {
        let Some(cap) = HEX_REGEX.captures(hex.trim()) else {
            return Err(EngineError::InvalidColor { value: hex.to_string() });
        };
        let (_, [r, g, b]) = cap.extract();
        let parse = |s: &str| u8::from_str_radix(s, 16).map_err(|_| EngineError::InvalidColor { value: hex.to_string() });
        Ok(Color::new(parse(r)?, parse(g)?, parse(b)?))
    }

    /// Looks up one of the named foreground/background colors.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let name = match name.as_str() {
            "green" | "neongreen" => "neon-green",
            "grey" | "gray" | "deep-gray" | "deepgrey" => "deep-grey",
            other => other,
        }
        .to_string();
        Self::FOREGROUNDS
            .iter()
            .chain(Self::BACKGROUNDS.iter())
            .find(|(n, _)| *n == name)
            .map(|(_, color)| *color)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = EngineError;

    /// Accepts a color name (`neon-green`, `deep-grey`, ...) or a raw hex value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(color) = Color::from_name(s) {
            return Ok(color);
        }
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(value: Color) -> Self {
        image::Rgba([value.r, value.g, value.b, 0xFF])
    }
}
