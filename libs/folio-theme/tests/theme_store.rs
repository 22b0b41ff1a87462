//! Theme store behavior against a file-backed preference slot
//!
//! These tests exercise the public API the way the site and the CLI use it:
//! open the preference file, build a store, select themes, reopen.

use folio_theme::{
    contrast_text_for, to_translucent, ContrastText, FilePreferences, PreferenceStore, ThemeId,
    ThemeStore, THEME_KEY,
};

fn store_at(path: &std::path::Path) -> ThemeStore<FilePreferences> {
    ThemeStore::new(FilePreferences::open(path))
}

#[test]
fn selection_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    let mut store = store_at(&path);
    assert_eq!(store.current().id, ThemeId::Ocean);
    store.set_theme(ThemeId::Midnight);
    drop(store);

    let store = store_at(&path);
    assert_eq!(store.current().id, ThemeId::Midnight);
}

#[test]
fn every_theme_resolves_after_set() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir.path().join("preferences.toml"));

    for id in ThemeId::ALL {
        store.set_theme(id);
        assert_eq!(store.current().id, id);
    }
}

#[test]
fn unknown_theme_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    let mut store = store_at(&path);
    store.set_theme(ThemeId::Forest);
    let before = std::fs::read_to_string(&path).unwrap();

    assert!(!store.set_theme_by_name("not-a-real-theme"));
    assert_eq!(store.current().id, ThemeId::Forest);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn invalid_persisted_value_is_not_healed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "themeId = \"solarized\"\n").unwrap();

    let store = store_at(&path);
    assert_eq!(store.current().id, ThemeId::Ocean);
    assert_eq!(
        store.preferences().get(THEME_KEY).as_deref(),
        Some("solarized")
    );
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "themeId = \"solarized\"\n"
    );
}

#[test]
fn contrast_and_translucent_contract() {
    assert_eq!(contrast_text_for("#ffffff").unwrap(), ContrastText::Dark);
    assert_eq!(contrast_text_for("#000000").unwrap(), ContrastText::Light);
    // Exactly 0.6 stays light-text; one step brighter flips to dark-text
    assert_eq!(contrast_text_for("#999999").unwrap(), ContrastText::Light);
    assert_eq!(contrast_text_for("#9a9a9a").unwrap(), ContrastText::Dark);

    let t = to_translucent("#112233", 0.18).unwrap();
    assert_eq!((t.red(), t.green(), t.blue()), (17, 34, 51));
    assert_eq!(t.alpha(), 0.18);
}

#[test]
fn published_variables_track_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir.path().join("preferences.toml"));
    let mut rx = store.subscribe();

    store.set_theme(ThemeId::Sunset);
    let change = rx.try_recv().unwrap();
    assert_eq!(change.current, ThemeId::Sunset);

    let vars = store.style_variables();
    assert_eq!(vars.get("accent-600").as_deref(), Some("#e11d48"));
    assert_eq!(
        vars.get("accent-contrast-text").as_deref(),
        Some(contrast_text_for("#e11d48").unwrap().as_str())
    );
}
