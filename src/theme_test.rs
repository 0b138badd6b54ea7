use super::*;

struct ReadOnlyStore {
    value: Option<String>,
}

impl PreferenceStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), PageError> {
        Err(PageError::Js("QuotaExceededError".to_owned()))
    }
}

fn seeded(value: &str) -> MemoryStore {
    let mut store = MemoryStore::default();
    store.save("theme", value).unwrap();
    store
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_known_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_icons_match_active_theme() {
    assert_eq!(Theme::Dark.icon(), "☀️");
    assert_eq!(Theme::Light.icon(), "🌙");
}

#[test]
fn theme_toggled_is_involution() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// ThemeStore
// =============================================================

#[test]
fn get_theme_defaults_to_dark_when_absent() {
    let store = ThemeStore::new(MemoryStore::default(), "theme");
    assert_eq!(store.get_theme(), Theme::Dark);
    assert_eq!(store.current(), Theme::Dark);
}

#[test]
fn get_theme_defaults_to_dark_when_unrecognised() {
    let store = ThemeStore::new(seeded("sepia"), "theme");
    assert_eq!(store.get_theme(), Theme::Dark);
}

#[test]
fn get_theme_reads_persisted_value() {
    let store = ThemeStore::new(seeded("light"), "theme");
    assert_eq!(store.get_theme(), Theme::Light);
    assert_eq!(store.current(), Theme::Light);
}

#[test]
fn toggle_persists_new_value() {
    let mut store = ThemeStore::new(MemoryStore::default(), "theme");
    let next = store.toggle_theme(None).unwrap();
    assert_eq!(next, Theme::Light);
    assert_eq!(store.get_theme(), Theme::Light);
    assert_eq!(store.store().load("theme").as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_value_and_icon() {
    let mut store = ThemeStore::new(seeded("light"), "theme");
    let before = store.get_theme();
    store.toggle_theme(Some(before)).unwrap();
    let after = store.toggle_theme(None).unwrap();
    assert_eq!(after, before);
    assert_eq!(store.get_theme(), before);
    assert_eq!(after.icon(), before.icon());
}

#[test]
fn toggle_flips_what_the_document_shows() {
    let mut store = ThemeStore::new(seeded("dark"), "theme");
    let next = store.toggle_theme(Some(Theme::Light)).unwrap();
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.get_theme(), Theme::Dark);
}

#[test]
fn toggle_uses_custom_key() {
    let mut store = ThemeStore::new(MemoryStore::default(), "site-theme");
    store.toggle_theme(None).unwrap();
    assert_eq!(store.store().load("site-theme").as_deref(), Some("light"));
    assert_eq!(store.store().load("theme"), None);
}

#[test]
fn failed_write_still_switches_current_theme() {
    let mut store = ThemeStore::new(ReadOnlyStore { value: Some("dark".to_owned()) }, "theme");
    assert!(store.toggle_theme(None).is_err());
    assert_eq!(store.current(), Theme::Light);
    assert_eq!(store.get_theme(), Theme::Dark);
}

#[test]
fn early_applied_theme_is_what_the_later_toggle_sees() {
    // Attribute applied before the body exists, toggle wired afterwards on the same store.
    let mut store = ThemeStore::new(seeded("light"), "theme");
    let applied = store.get_theme();
    assert_eq!(applied, Theme::Light);
    assert_eq!(store.current(), applied);

    assert_eq!(store.toggle_theme(Some(applied)).unwrap(), Theme::Dark);
    assert_eq!(store.get_theme(), Theme::Dark);
}
