//! Theme registry
//!
//! The fixed catalog of named themes. Each entry carries a four-step accent
//! ramp (100 lightest to 700 darkest), the surface and text colors, the
//! utility-class tokens the views apply directly, and the glyph shown in the
//! theme picker. The catalog is a `static` and never changes at run time.

use crate::colors::HexColor;
use crate::icons::FolioIcon;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable theme key. Its string form is what gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    /// Blue accents on a light page (default)
    #[default]
    Ocean,
    /// Emerald accents on a light page
    Forest,
    /// Rose accents on a warm light page
    Sunset,
    /// Indigo accents on a dark page
    Midnight,
    /// Purple accents on a black page
    Aubergine,
}

impl ThemeId {
    /// Every identifier, in catalog order
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Ocean,
        ThemeId::Forest,
        ThemeId::Sunset,
        ThemeId::Midnight,
        ThemeId::Aubergine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Ocean => "ocean",
            ThemeId::Forest => "forest",
            ThemeId::Sunset => "sunset",
            ThemeId::Midnight => "midnight",
            ThemeId::Aubergine => "aubergine",
        }
    }

    /// Resolve the full definition
    pub fn definition(self) -> &'static ThemeDefinition {
        theme(self)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string does not name a catalog theme
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Opaque style token (a utility class the view applies verbatim)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StyleToken(pub &'static str);

impl StyleToken {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

/// A complete theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeDefinition {
    pub id: ThemeId,
    /// Human label
    pub name: &'static str,
    /// Accent hue family the ramp was taken from
    pub accent_family: &'static str,
    pub accent_100: HexColor,
    pub accent_500: HexColor,
    pub accent_600: HexColor,
    pub accent_700: HexColor,
    /// Page background
    pub background: StyleToken,
    /// Navigation surface
    pub nav_background: StyleToken,
    pub nav_background_color: HexColor,
    /// Primary foreground
    pub text: StyleToken,
    pub text_color: HexColor,
    /// Secondary foreground for nav links
    pub nav_text: StyleToken,
    /// Glyph shown in the theme picker
    pub indicator: FolioIcon,
}

impl ThemeDefinition {
    /// The accent ramp, lightest first
    pub fn accent_ramp(&self) -> [HexColor; 4] {
        [self.accent_100, self.accent_500, self.accent_600, self.accent_700]
    }

    /// Whether the navigation surface is light enough for dark text
    pub fn has_light_nav(&self) -> bool {
        self.nav_background_color.is_light()
    }
}

/// The theme catalog, indexed in `ThemeId::ALL` order
pub static THEMES: [ThemeDefinition; 5] = [
    ThemeDefinition {
        id: ThemeId::Ocean,
        name: "Ocean",
        accent_family: "blue",
        accent_100: HexColor::from_rgb(0xdb, 0xea, 0xfe),
        accent_500: HexColor::from_rgb(0x3b, 0x82, 0xf6),
        accent_600: HexColor::from_rgb(0x25, 0x63, 0xeb),
        accent_700: HexColor::from_rgb(0x1d, 0x4e, 0xd8),
        background: StyleToken("bg-blue-100"),
        nav_background: StyleToken("bg-white"),
        nav_background_color: HexColor::from_rgb(0xff, 0xff, 0xff),
        text: StyleToken("text-gray-900"),
        text_color: HexColor::from_rgb(0x11, 0x18, 0x27),
        nav_text: StyleToken("text-gray-600"),
        indicator: FolioIcon::Droplet,
    },
    ThemeDefinition {
        id: ThemeId::Forest,
        name: "Forest",
        accent_family: "emerald",
        accent_100: HexColor::from_rgb(0xd1, 0xfa, 0xe5),
        accent_500: HexColor::from_rgb(0x10, 0xb9, 0x81),
        accent_600: HexColor::from_rgb(0x05, 0x96, 0x69),
        accent_700: HexColor::from_rgb(0x04, 0x78, 0x57),
        background: StyleToken("bg-green-50"),
        nav_background: StyleToken("bg-white"),
        nav_background_color: HexColor::from_rgb(0xff, 0xff, 0xff),
        text: StyleToken("text-gray-800"),
        text_color: HexColor::from_rgb(0x1f, 0x29, 0x37),
        nav_text: StyleToken("text-gray-600"),
        indicator: FolioIcon::Leaf,
    },
    ThemeDefinition {
        id: ThemeId::Sunset,
        name: "Sunset",
        accent_family: "rose",
        accent_100: HexColor::from_rgb(0xff, 0xf1, 0xf2),
        accent_500: HexColor::from_rgb(0xfb, 0x71, 0x85),
        accent_600: HexColor::from_rgb(0xe1, 0x1d, 0x48),
        accent_700: HexColor::from_rgb(0x9f, 0x12, 0x39),
        background: StyleToken("bg-yellow-50"),
        nav_background: StyleToken("bg-white"),
        nav_background_color: HexColor::from_rgb(0xff, 0xff, 0xff),
        text: StyleToken("text-gray-900"),
        text_color: HexColor::from_rgb(0x11, 0x18, 0x27),
        nav_text: StyleToken("text-gray-600"),
        indicator: FolioIcon::Sun,
    },
    ThemeDefinition {
        id: ThemeId::Midnight,
        name: "Midnight",
        accent_family: "indigo",
        accent_100: HexColor::from_rgb(0xee, 0xf2, 0xff),
        accent_500: HexColor::from_rgb(0x63, 0x66, 0xf1),
        accent_600: HexColor::from_rgb(0x4f, 0x46, 0xe5),
        accent_700: HexColor::from_rgb(0x43, 0x38, 0xca),
        background: StyleToken("bg-gray-900"),
        nav_background: StyleToken("bg-gray-800"),
        nav_background_color: HexColor::from_rgb(0x1f, 0x29, 0x37),
        text: StyleToken("text-gray-100"),
        text_color: HexColor::from_rgb(0xf9, 0xfa, 0xfb),
        nav_text: StyleToken("text-gray-400"),
        indicator: FolioIcon::Moon,
    },
    ThemeDefinition {
        id: ThemeId::Aubergine,
        name: "Aubergine",
        accent_family: "purple",
        accent_100: HexColor::from_rgb(0xf3, 0xe8, 0xff),
        accent_500: HexColor::from_rgb(0x8b, 0x5c, 0xf6),
        accent_600: HexColor::from_rgb(0x7c, 0x3a, 0xed),
        accent_700: HexColor::from_rgb(0x6d, 0x28, 0xd9),
        background: StyleToken("bg-black"),
        nav_background: StyleToken("bg-black"),
        nav_background_color: HexColor::from_rgb(0x00, 0x00, 0x00),
        text: StyleToken("text-gray-300"),
        text_color: HexColor::from_rgb(0xd1, 0xd5, 0xdb),
        nav_text: StyleToken("text-gray-400"),
        indicator: FolioIcon::Star,
    },
];

/// Look up a theme definition. Total over the closed identifier set.
pub fn theme(id: ThemeId) -> &'static ThemeDefinition {
    match id {
        ThemeId::Ocean => &THEMES[0],
        ThemeId::Forest => &THEMES[1],
        ThemeId::Sunset => &THEMES[2],
        ThemeId::Midnight => &THEMES[3],
        ThemeId::Aubergine => &THEMES[4],
    }
}

/// All theme definitions in catalog order
pub fn all() -> impl Iterator<Item = &'static ThemeDefinition> {
    THEMES.iter()
}
