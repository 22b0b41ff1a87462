//! Derived style calculator
//!
//! Hex color parsing plus the two derivations the style variables need:
//! a translucent variant of a color and a binary light/dark contrast text
//! choice based on perceived luminance.
//!
//! Accepted hex forms are `rrggbb` and the `rgb` shorthand, each with an
//! optional leading `#`. Alpha-embedded hex (`rrggbbaa`) and every other
//! shape are rejected with [`ColorError`] rather than mapped to a fallback.

use palette::{Alpha, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Luminance above which a background is considered light.
pub const CONTRAST_THRESHOLD: f64 = 0.6;

// Luminance weights scaled by 1000 so the threshold test is exact integer math:
// (0.299 R + 0.587 G + 0.114 B) / 255 > 0.6  <=>  299 R + 587 G + 114 B > 153_000
const WEIGHT_RED: u32 = 299;
const WEIGHT_GREEN: u32 = 587;
const WEIGHT_BLUE: u32 = 114;
const WEIGHTED_THRESHOLD: u32 = 153_000;

/// Errors produced when parsing a hex color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("unsupported hex length {len} in {input:?} (expected 3 or 6 digits)")]
    Length { input: String, len: usize },
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

/// An opaque sRGB color written as hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HexColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::from_rgb(0x00, 0x00, 0x00);
    pub const WHITE: HexColor = HexColor::from_rgb(0xff, 0xff, 0xff);

    /// Build a color from 8-bit channels
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(ColorError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(input.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::Digit(input.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::from_rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let nibble = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 0x11);
                Ok(Self::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            len => Err(ColorError::Length {
                input: input.to_string(),
                len,
            }),
        }
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    /// Perceived luminance in `[0, 1]`
    pub fn luminance(self) -> f64 {
        f64::from(self.weighted_luminance()) / 255_000.0
    }

    fn weighted_luminance(self) -> u32 {
        WEIGHT_RED * u32::from(self.red)
            + WEIGHT_GREEN * u32::from(self.green)
            + WEIGHT_BLUE * u32::from(self.blue)
    }

    /// Whether this color counts as a light background
    pub fn is_light(self) -> bool {
        self.weighted_luminance() > WEIGHTED_THRESHOLD
    }

    /// Text color that stays legible on top of this color
    pub fn contrast_text(self) -> ContrastText {
        if self.is_light() {
            ContrastText::Dark
        } else {
            ContrastText::Light
        }
    }

    /// This color with an alpha channel, clamped to `[0, 1]`
    pub fn with_alpha(self, alpha: f32) -> Translucent {
        Translucent(Alpha {
            color: self.to_srgb(),
            alpha: alpha.clamp(0.0, 1.0),
        })
    }

    pub fn to_srgb(self) -> Srgb<u8> {
        Srgb::new(self.red, self.green, self.blue)
    }
}

impl From<Srgb<u8>> for HexColor {
    fn from(color: Srgb<u8>) -> Self {
        Self::from_rgb(color.red, color.green, color.blue)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// A color with an alpha channel, rendered as a CSS `rgba()` expression
#[derive(Debug, Clone, Copy)]
pub struct Translucent(Alpha<Srgb<u8>, f32>);

impl Translucent {
    pub fn red(&self) -> u8 {
        self.0.color.red
    }

    pub fn green(&self) -> u8 {
        self.0.color.green
    }

    pub fn blue(&self) -> u8 {
        self.0.color.blue
    }

    pub fn alpha(&self) -> f32 {
        self.0.alpha
    }

    /// The opaque color underneath
    pub fn opaque(&self) -> HexColor {
        HexColor::from(self.0.color)
    }
}

impl fmt::Display for Translucent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

/// The two fixed contrast text literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastText {
    /// Near-black, for light backgrounds
    Dark,
    /// Near-white, for dark backgrounds
    Light,
}

impl ContrastText {
    pub const DARK_HEX: &'static str = "#111827";
    pub const LIGHT_HEX: &'static str = "#f9fafb";

    pub fn as_str(self) -> &'static str {
        match self {
            ContrastText::Dark => Self::DARK_HEX,
            ContrastText::Light => Self::LIGHT_HEX,
        }
    }

    pub fn color(self) -> HexColor {
        match self {
            ContrastText::Dark => HexColor::from_rgb(0x11, 0x18, 0x27),
            ContrastText::Light => HexColor::from_rgb(0xf9, 0xfa, 0xfb),
        }
    }
}

impl fmt::Display for ContrastText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Translucent variant of a hex color
pub fn to_translucent(hex: &str, alpha: f32) -> Result<Translucent, ColorError> {
    Ok(HexColor::parse(hex)?.with_alpha(alpha))
}

/// Contrast text literal for a hex background
pub fn contrast_text_for(hex: &str) -> Result<ContrastText, ColorError> {
    Ok(HexColor::parse(hex)?.contrast_text())
}
