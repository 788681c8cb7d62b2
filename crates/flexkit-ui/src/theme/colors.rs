//! Color definitions for Flexkit themes

use flexkit_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from 0-255 values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Parse `#rrggbb` or `#rrggbbaa`
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::rgb(value)),
            8 => Some(Self::new(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            )),
            _ => None,
        }
    }

    fn channel(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b)
        )?;
        let alpha = Self::channel(self.a);
        if alpha != 255 {
            write!(f, "{:02x}", alpha)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s).ok_or_else(|| Error::Config(format!("invalid color: {s}")))
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Theme color palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Primary brand color
    pub primary: Rgba,
    pub secondary: Rgba,
    pub error: Rgba,
    /// Card/sheet background
    pub surface: Rgba,
    pub background: Rgba,
    /// Text drawn on `surface`
    pub on_surface: Rgba,
    pub outline: Rgba,
}

impl ThemeColors {
    pub fn light() -> Self {
        Self {
            primary: Rgba::rgb(0x6200ee),
            secondary: Rgba::rgb(0x03dac6),
            error: Rgba::rgb(0xb00020),
            surface: Rgba::rgb(0xffffff),
            background: Rgba::rgb(0xffffff),
            on_surface: Rgba::rgb(0x1c1b1f),
            outline: Rgba::rgb(0x79747e),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Rgba::rgb(0xbb86fc),
            secondary: Rgba::rgb(0x03dac6),
            error: Rgba::rgb(0xcf6679),
            surface: Rgba::rgb(0x121212),
            background: Rgba::rgb(0x121212),
            on_surface: Rgba::rgb(0xe6e1e5),
            outline: Rgba::rgb(0x938f99),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgba::parse_hex("#6200ee"), Some(Rgba::rgb(0x6200ee)));
        assert_eq!(Rgba::parse_hex("#00000080").map(|c| c.to_string()), Some("#00000080".to_string()));
        assert_eq!(Rgba::parse_hex("6200ee"), None);
        assert_eq!(Rgba::parse_hex("#62e"), None);
        assert_eq!(Rgba::parse_hex("#zzzzzz"), None);
        assert_eq!(Rgba::parse_hex("#+62000ee"), None);
        assert_eq!(Rgba::parse_hex("#+6200e"), None);
    }

    #[test]
    fn test_display_opaque_omits_alpha() {
        assert_eq!(Rgba::rgb(0xbb86fc).to_string(), "#bb86fc");
    }

    #[test]
    fn test_colors_serde_as_hex() {
        let json = serde_json::to_value(ThemeColors::light()).unwrap();
        assert_eq!(json["onSurface"], "#1c1b1f");

        let parsed: ThemeColors = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, ThemeColors::light());

        let bad = serde_json::json!({
            "primary": "purple", "secondary": "#000000", "error": "#000000",
            "surface": "#000000", "background": "#000000", "onSurface": "#000000",
            "outline": "#000000"
        });
        assert!(serde_json::from_value::<ThemeColors>(bad).is_err());
    }
}
