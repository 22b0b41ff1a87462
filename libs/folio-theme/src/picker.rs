//! Theme picker view model
//!
//! What the navigation bar's theme menu needs to draw: one entry per catalog
//! theme plus the style of the palette trigger button.

use crate::colors::{HexColor, Translucent};
use crate::icons::FolioIcon;
use crate::registry::{self, ThemeDefinition, ThemeId};

/// Border color of unselected swatches
pub const SWATCH_BORDER: HexColor = HexColor::from_rgb(0xd1, 0xd5, 0xdb);

/// Opacity of the ring around the selected swatch (0x80 / 0xff)
pub const RING_ALPHA: f32 = 128.0 / 255.0;

/// One row of the picker menu
#[derive(Debug, Clone, Copy)]
pub struct PickerEntry {
    pub id: ThemeId,
    pub name: &'static str,
    pub icon: FolioIcon,
    pub icon_color: HexColor,
    pub swatch: HexColor,
    pub border: HexColor,
    /// Glow around the swatch, present only for the selected theme
    pub ring: Option<Translucent>,
    pub selected: bool,
}

impl PickerEntry {
    fn new(theme: &'static ThemeDefinition, current: ThemeId) -> Self {
        let selected = theme.id == current;
        Self {
            id: theme.id,
            name: theme.name,
            icon: theme.indicator,
            icon_color: theme.accent_600,
            swatch: theme.accent_100,
            border: if selected { theme.accent_500 } else { SWATCH_BORDER },
            ring: selected.then(|| theme.accent_100.with_alpha(RING_ALPHA)),
            selected,
        }
    }
}

/// Picker rows in catalog order
pub fn picker_entries(current: ThemeId) -> Vec<PickerEntry> {
    registry::all()
        .map(|theme| PickerEntry::new(theme, current))
        .collect()
}

/// Style of the palette button that opens the picker. Values are CSS
/// variable references so they track the published variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerStyle {
    pub icon: FolioIcon,
    pub background: Option<&'static str>,
    pub color: &'static str,
    pub ring: Option<&'static str>,
}

/// Light nav surfaces get a plain accent glyph; dark ones get a filled
/// accent button with contrast text and a translucent ring.
pub fn trigger_style(theme: &ThemeDefinition) -> TriggerStyle {
    if theme.has_light_nav() {
        TriggerStyle {
            icon: FolioIcon::Palette,
            background: None,
            color: "var(--accent-600)",
            ring: None,
        }
    } else {
        TriggerStyle {
            icon: FolioIcon::Palette,
            background: Some("var(--accent-600)"),
            color: "var(--accent-contrast-text)",
            ring: Some("var(--accent-100-translucent)"),
        }
    }
}
