//! Theme store
//!
//! Holds the current theme selection for the lifetime of the page. The
//! selection is read once from a [`PreferenceStore`] at construction and
//! written back on every successful [`ThemeStore::set_theme`]. Consumers
//! get the resolved definition, the cached style variables, and a change
//! feed via [`ThemeStore::subscribe`].

use crate::preferences::PreferenceStore;
use crate::registry::{theme, ThemeDefinition, ThemeId};
use crate::variables::{derive_style_variables, StyleVariables};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// The single persisted key
pub const THEME_KEY: &str = "themeId";

/// Identifier used when nothing valid is persisted
pub const DEFAULT_THEME: ThemeId = ThemeId::Ocean;

const CHANNEL_CAPACITY: usize = 16;

/// Emitted after each successful selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChanged {
    pub previous: ThemeId,
    pub current: ThemeId,
}

/// Theme selection state
pub struct ThemeStore<P: PreferenceStore> {
    current: ThemeId,
    variables: StyleVariables,
    preferences: P,
    events: broadcast::Sender<ThemeChanged>,
}

impl<P: PreferenceStore> ThemeStore<P> {
    /// Initialize from the persisted slot. Absent or unknown values fall
    /// back to [`DEFAULT_THEME`] without writing anything back.
    pub fn new(preferences: P) -> Self {
        let current = match preferences.get(THEME_KEY) {
            Some(raw) => raw.parse::<ThemeId>().unwrap_or_else(|_| {
                debug!("Persisted theme {:?} is not in the catalog, using {}", raw, DEFAULT_THEME);
                DEFAULT_THEME
            }),
            None => DEFAULT_THEME,
        };
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            current,
            variables: derive_style_variables(theme(current)),
            preferences,
            events,
        }
    }

    /// The resolved definition for the current selection
    pub fn current(&self) -> &'static ThemeDefinition {
        theme(self.current)
    }

    pub fn current_id(&self) -> ThemeId {
        self.current
    }

    /// Style variables for the current selection
    pub fn style_variables(&self) -> &StyleVariables {
        &self.variables
    }

    /// Select a theme and persist it. A failed write is logged; the
    /// in-memory selection still changes.
    pub fn set_theme(&mut self, id: ThemeId) {
        let previous = self.current;
        self.current = id;
        if previous != id {
            self.variables = derive_style_variables(theme(id));
        }

        if let Err(e) = self.preferences.set(THEME_KEY, id.as_str()) {
            warn!("Failed to persist theme {}: {}", id, e);
        }

        debug!("Theme changed: {} -> {}", previous, id);
        // No subscribers is not an error
        let _ = self.events.send(ThemeChanged {
            previous,
            current: id,
        });
    }

    /// Select a theme by its string key. Unknown keys are ignored and leave
    /// both the selection and the persisted slot untouched.
    pub fn set_theme_by_name(&mut self, name: &str) -> bool {
        match name.parse::<ThemeId>() {
            Ok(id) => {
                self.set_theme(id);
                true
            }
            Err(e) => {
                debug!("Ignoring theme selection: {}", e);
                false
            }
        }
    }

    /// Subscribe to selection changes
    pub fn subscribe(&self) -> broadcast::Receiver<ThemeChanged> {
        self.events.subscribe()
    }

    /// The backing preference store
    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Tear down the store, returning the backend
    pub fn into_preferences(self) -> P {
        self.preferences
    }
}
