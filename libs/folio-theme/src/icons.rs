//! Icon system for the portfolio theme
//!
//! Glyph references used by the theme picker. Views map these onto whatever
//! icon font they ship; the Material Design code points are provided for
//! hosts that use it.

use serde::{Deserialize, Serialize};

/// Icon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FolioIcon {
    // ═══════════════════════════════════════════════════════════════════════════
    // THEME INDICATORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// Water droplet (ocean)
    Droplet,
    /// Leaf (forest)
    Leaf,
    /// Sun (sunset)
    Sun,
    /// Crescent moon (midnight)
    Moon,
    /// Star (aubergine)
    Star,

    // ═══════════════════════════════════════════════════════════════════════════
    // PICKER
    // ═══════════════════════════════════════════════════════════════════════════
    /// Button that opens the theme menu
    Palette,
}

impl FolioIcon {
    /// Get the Unicode character for this icon (Material Design icons font)
    pub fn to_char(self) -> char {
        match self {
            FolioIcon::Droplet => '\u{E798}',    // water_drop
            FolioIcon::Leaf => '\u{EA35}',       // eco
            FolioIcon::Sun => '\u{E430}',        // wb_sunny
            FolioIcon::Moon => '\u{E51C}',       // dark_mode
            FolioIcon::Star => '\u{E838}',       // star

            FolioIcon::Palette => '\u{E40A}', // palette
        }
    }

    /// Get the icon name as a string (useful for logging/debugging)
    pub fn name(self) -> &'static str {
        match self {
            FolioIcon::Droplet => "droplet",
            FolioIcon::Leaf => "leaf",
            FolioIcon::Sun => "sun",
            FolioIcon::Moon => "moon",
            FolioIcon::Star => "star",
            FolioIcon::Palette => "palette",
        }
    }
}
