//! Style variable surface
//!
//! The flat set of named variables the views read (as CSS custom
//! properties). Derived once per theme change from a [`ThemeDefinition`].

use crate::colors::{ContrastText, HexColor, Translucent};
use crate::registry::ThemeDefinition;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt::Write;

/// Opacity of `accent-100-translucent`
pub const TRANSLUCENT_ALPHA: f32 = 0.18;

pub const ACCENT_100: &str = "accent-100";
pub const ACCENT_500: &str = "accent-500";
pub const ACCENT_600: &str = "accent-600";
pub const ACCENT_700: &str = "accent-700";
pub const ACCENT_100_TRANSLUCENT: &str = "accent-100-translucent";
pub const ACCENT_CONTRAST_TEXT: &str = "accent-contrast-text";
pub const TEXT_COLOR: &str = "text-color";
pub const NAV_BACKGROUND: &str = "nav-background";

/// Variable names in publication order
pub const NAMES: [&str; 8] = [
    ACCENT_100,
    ACCENT_500,
    ACCENT_600,
    ACCENT_700,
    ACCENT_100_TRANSLUCENT,
    ACCENT_CONTRAST_TEXT,
    TEXT_COLOR,
    NAV_BACKGROUND,
];

/// Resolved style variables for one theme
#[derive(Debug, Clone, Copy)]
pub struct StyleVariables {
    pub accent_100: HexColor,
    pub accent_500: HexColor,
    pub accent_600: HexColor,
    pub accent_700: HexColor,
    pub accent_100_translucent: Translucent,
    pub accent_contrast_text: ContrastText,
    pub text_color: HexColor,
    pub nav_background: HexColor,
}

/// Derive the variable map for a theme
pub fn derive_style_variables(theme: &ThemeDefinition) -> StyleVariables {
    StyleVariables {
        accent_100: theme.accent_100,
        accent_500: theme.accent_500,
        accent_600: theme.accent_600,
        accent_700: theme.accent_700,
        accent_100_translucent: theme.accent_100.with_alpha(TRANSLUCENT_ALPHA),
        accent_contrast_text: theme.accent_600.contrast_text(),
        text_color: theme.text_color,
        nav_background: theme.nav_background_color,
    }
}

impl StyleVariables {
    /// `(name, value)` pairs in publication order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (ACCENT_100, self.accent_100.to_string()),
            (ACCENT_500, self.accent_500.to_string()),
            (ACCENT_600, self.accent_600.to_string()),
            (ACCENT_700, self.accent_700.to_string()),
            (ACCENT_100_TRANSLUCENT, self.accent_100_translucent.to_string()),
            (ACCENT_CONTRAST_TEXT, self.accent_contrast_text.to_string()),
            (TEXT_COLOR, self.text_color.to_string()),
            (NAV_BACKGROUND, self.nav_background.to_string()),
        ]
    }

    /// Value of a variable by name
    pub fn get(&self, name: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Render as a `:root` block of CSS custom properties
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.entries() {
            // Writing to a String cannot fail
            let _ = writeln!(css, "  --{name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl Serialize for StyleVariables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (name, value) in &entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{theme, ThemeId};

    #[test]
    fn test_ocean_variables() {
        let vars = derive_style_variables(theme(ThemeId::Ocean));
        assert_eq!(vars.get("accent-100").as_deref(), Some("#dbeafe"));
        assert_eq!(vars.get("accent-500").as_deref(), Some("#3b82f6"));
        assert_eq!(vars.get("accent-600").as_deref(), Some("#2563eb"));
        assert_eq!(vars.get("accent-700").as_deref(), Some("#1d4ed8"));
        assert_eq!(
            vars.get("accent-100-translucent").as_deref(),
            Some("rgba(219, 234, 254, 0.18)")
        );
        // #2563eb is dark, so contrast text is the light literal
        assert_eq!(vars.get("accent-contrast-text").as_deref(), Some("#f9fafb"));
        assert_eq!(vars.get("text-color").as_deref(), Some("#111827"));
        assert_eq!(vars.get("nav-background").as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_names_are_published_in_order() {
        let vars = derive_style_variables(theme(ThemeId::Forest));
        let names: Vec<&str> = vars.entries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, NAMES.to_vec());
    }

    #[test]
    fn test_translucent_alpha_constant() {
        assert_eq!(TRANSLUCENT_ALPHA, 0.18);
        for id in ThemeId::ALL {
            let vars = derive_style_variables(theme(id));
            assert_eq!(vars.accent_100_translucent.alpha(), TRANSLUCENT_ALPHA);
            assert_eq!(vars.accent_100_translucent.opaque(), theme(id).accent_100);
        }
    }

    #[test]
    fn test_unknown_name() {
        let vars = derive_style_variables(theme(ThemeId::Ocean));
        assert_eq!(vars.get("nav-bg"), None);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let a = derive_style_variables(theme(ThemeId::Sunset));
        let b = derive_style_variables(theme(ThemeId::Sunset));
        assert_eq!(a.entries(), b.entries());
    }

    #[test]
    fn test_to_css() {
        let css = derive_style_variables(theme(ThemeId::Midnight)).to_css();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --accent-600: #4f46e5;\n"));
        assert!(css.contains("  --nav-background: #1f2937;\n"));
        assert!(css.ends_with("}\n"));
        assert_eq!(css.lines().count(), NAMES.len() + 2);
    }

    #[test]
    fn test_serialize_flat_map() {
        let vars = derive_style_variables(theme(ThemeId::Aubergine));
        let json = serde_json::to_value(vars).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), NAMES.len());
        assert_eq!(obj["accent-700"], "#6d28d9");
        assert_eq!(obj["text-color"], "#d1d5db");
    }
}
