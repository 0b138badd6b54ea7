//! Dark/light theme persisted to `localStorage`.
//!
//! The stored value is `"dark"` or `"light"` under a single key; the
//! active theme is mirrored as `data-theme` on the `<html>` element and as a
//! glyph inside the toggle button. Dark is the default when nothing (or
//! something unrecognised) is stored.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. When storage is unavailable or a write
//! fails, the theme still switches for the current page and the failure is
//! only logged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use crate::consts::{ICON_DARK, ICON_LIGHT};
use crate::error::PageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored or attribute value. Case-sensitive, like the markup.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Glyph shown in the toggle button while this theme is active.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => ICON_DARK,
            Self::Light => ICON_LIGHT,
        }
    }
}

/// Key-value persistence for the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Process-local store used when the browser refuses `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The theme preference plus the store it is persisted in.
#[derive(Debug)]
pub struct ThemeStore<P> {
    store: P,
    key: String,
    current: Theme,
}

impl<P: PreferenceStore> ThemeStore<P> {
    /// Open the store and read the persisted theme once.
    pub fn new(store: P, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = read_theme(&store, &key);
        Self { store, key, current }
    }

    /// The persisted theme, or [`Theme::Dark`] when none is stored.
    #[must_use]
    pub fn get_theme(&self) -> Theme {
        read_theme(&self.store, &self.key)
    }

    /// The theme currently shown, which may differ from storage after a failed write.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it.
    ///
    /// `shown` is what the document currently displays; when it is `None`
    /// the last known theme is flipped instead. The in-memory theme changes
    /// even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the write fails.
    pub fn toggle_theme(&mut self, shown: Option<Theme>) -> Result<Theme, PageError> {
        let next = shown.unwrap_or(self.current).toggled();
        self.current = next;
        self.store.save(&self.key, next.as_str())?;
        Ok(next)
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}

fn read_theme<P: PreferenceStore>(store: &P, key: &str) -> Theme {
    store
        .load(key)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

#[cfg(feature = "hydrate")]
pub use browser::{ThemeBinding, apply_initial, mount};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Element, Event, Storage};

    use super::{MemoryStore, PreferenceStore, Theme, ThemeStore};
    use crate::config::ThemeConfig;
    use crate::dom;
    use crate::error::PageError;

    /// `localStorage` when the browser grants it, memory otherwise.
    enum BrowserStore {
        Local(Storage),
        Memory(MemoryStore),
    }

    impl BrowserStore {
        fn open(window: &web_sys::Window) -> Self {
            match window.local_storage() {
                Ok(Some(storage)) => Self::Local(storage),
                Ok(None) | Err(_) => {
                    log::warn!("theme: localStorage unavailable; preference will not persist");
                    Self::Memory(MemoryStore::default())
                }
            }
        }
    }

    impl PreferenceStore for BrowserStore {
        fn load(&self, key: &str) -> Option<String> {
            match self {
                Self::Local(storage) => storage.get_item(key).unwrap_or_default(),
                Self::Memory(memory) => memory.load(key),
            }
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), PageError> {
            match self {
                Self::Local(storage) => Ok(storage.set_item(key, value)?),
                Self::Memory(memory) => memory.save(key, value),
            }
        }
    }

    fn apply_theme(root: &Element, attribute: &str, icon: Option<&Element>, theme: Theme) {
        if let Err(err) = root.set_attribute(attribute, theme.as_str()) {
            log::warn!("theme: could not set {attribute}: {}", PageError::from(err));
        }
        if let Some(icon) = icon {
            icon.set_text_content(Some(theme.icon()));
        }
    }

    /// The applied theme and its store, shared between the early attribute
    /// pass and the toggle wiring once the body exists.
    pub struct ThemeBinding {
        root: Element,
        store: Rc<RefCell<ThemeStore<BrowserStore>>>,
    }

    /// Set `data-theme` from storage. Needs only `<html>`, so it runs before
    /// the body is parsed.
    pub fn apply_initial(
        window: &web_sys::Window,
        document: &Document,
        config: &ThemeConfig,
    ) -> Result<ThemeBinding, PageError> {
        let root = document
            .document_element()
            .ok_or_else(|| PageError::missing("html"))?;
        let store = ThemeStore::new(BrowserStore::open(window), config.storage_key.clone());
        let initial = store.get_theme();
        apply_theme(&root, &config.attribute, None, initial);
        log::debug!("theme: applied {}", initial.as_str());
        Ok(ThemeBinding { root, store: Rc::new(RefCell::new(store)) })
    }

    /// Show the icon for the applied theme and wire the toggle button.
    pub fn mount(document: &Document, config: &ThemeConfig, binding: &ThemeBinding) -> Result<(), PageError> {
        let toggle = document
            .get_element_by_id(&config.toggle_id)
            .ok_or_else(|| PageError::missing(&format!("#{}", config.toggle_id)))?;
        let icon = dom::query_within(&toggle, &config.icon_selector)?;
        let (root, store) = (binding.root.clone(), Rc::clone(&binding.store));
        apply_theme(&root, &config.attribute, Some(&icon), store.borrow().current());

        let attribute = config.attribute.clone();
        dom::listen(&toggle, "click", move |_: Event| {
            let shown = root.get_attribute(&attribute).as_deref().and_then(Theme::parse);
            let mut store = store.borrow_mut();
            let next = match store.toggle_theme(shown) {
                Ok(next) => next,
                Err(err) => {
                    log::warn!("theme: preference not saved; {err}");
                    store.current()
                }
            };
            apply_theme(&root, &attribute, Some(&icon), next);
        })
    }
}
