//! # Folio Theme
//!
//! Theming core for the portfolio site.
//!
//! This library provides:
//! - The fixed theme catalog (accent ramp, surfaces, text, picker glyph)
//! - Derived colors (translucent variants, luminance-based contrast text)
//! - The flat style-variable map the views consume
//! - A theme store with a single persisted preference and change feed
//! - The theme picker view model

pub mod colors;
pub mod icons;
pub mod picker;
pub mod preferences;
pub mod registry;
pub mod store;
pub mod variables;

pub use colors::{contrast_text_for, to_translucent, ColorError, ContrastText, HexColor, Translucent};
pub use icons::FolioIcon;
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceError, PreferenceStore};
pub use registry::{theme, StyleToken, ThemeDefinition, ThemeId, UnknownTheme, THEMES};
pub use store::{ThemeChanged, ThemeStore, DEFAULT_THEME, THEME_KEY};
pub use variables::{derive_style_variables, StyleVariables, TRANSLUCENT_ALPHA};

/// Style variables for a theme
pub fn style_variables(id: ThemeId) -> StyleVariables {
    derive_style_variables(theme(id))
}
