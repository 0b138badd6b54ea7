//! Site configuration embedded in the page markup.
//!
//! The page may carry a `<script type="application/json" id="site-config">`
//! block. Every field is optional; anything missing falls back to the values
//! in [`crate::consts`]. Keys are camelCase to match the markup's JSON.
//!
//! The block has to precede the script tag so the theme can be applied
//! before the body is parsed.
//!
//! ```json
//! { "logLevel": "debug", "strip": { "policy": "auto-scroll" },
//!   "contact": { "sendingLabel": "Wysyłanie...", "sentLabel": "Wysłano! ✓" } }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::error::PageError;
use crate::strip::StripPolicy;

/// Console log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[cfg(feature = "hydrate")]
impl LogLevel {
    #[must_use]
    pub fn filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub icon_selector: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            toggle_id: THEME_TOGGLE_ID.to_owned(),
            icon_selector: THEME_ICON_SELECTOR.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub stagger_secs: f64,
    pub visible_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: REVEAL_SELECTOR.to_owned(),
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            stagger_secs: REVEAL_STAGGER_SECS,
            visible_class: VISIBLE_CLASS.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StripConfig {
    pub selector: String,
    pub policy: StripPolicy,
    pub mobile_breakpoint_px: f64,
    pub drag_multiplier: f64,
    pub card_width_px: f64,
    pub card_count: u32,
    pub speed_px: f64,
    pub scrolled_class: String,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            selector: STRIP_SELECTOR.to_owned(),
            policy: StripPolicy::default(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            drag_multiplier: DRAG_MULTIPLIER,
            card_width_px: CARD_WIDTH_PX,
            card_count: CARD_COUNT,
            speed_px: AUTO_SCROLL_SPEED_PX,
            scrolled_class: SCROLLED_CLASS.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    pub form_selector: String,
    pub button_selector: String,
    pub label_selector: String,
    pub sending_label: String,
    pub sent_label: String,
    pub sending_delay_ms: u32,
    pub sent_delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_selector: FORM_SELECTOR.to_owned(),
            button_selector: SUBMIT_BUTTON_SELECTOR.to_owned(),
            label_selector: SUBMIT_LABEL_SELECTOR.to_owned(),
            sending_label: SENDING_LABEL.to_owned(),
            sent_label: SENT_LABEL.to_owned(),
            sending_delay_ms: SENDING_DELAY_MS,
            sent_delay_ms: SENT_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnchorConfig {
    pub selector: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { selector: ANCHOR_SELECTOR.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxConfig {
    pub hero_selector: String,
    pub factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { hero_selector: HERO_SELECTOR.to_owned(), factor: PARALLAX_FACTOR }
    }
}

/// Complete page configuration, one section per component.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub theme: ThemeConfig,
    pub reveal: RevealConfig,
    pub strip: StripConfig,
    pub contact: ContactConfig,
    pub anchor: AnchorConfig,
    pub parallax: ParallaxConfig,
}

impl SiteConfig {
    /// Parse a config block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] when the text is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Read the embedded config block, falling back to defaults.
///
/// A malformed block is logged and ignored so a typo in the markup never
/// disables the page behavior.
#[cfg(feature = "hydrate")]
pub fn load(document: &web_sys::Document) -> SiteConfig {
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = block.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config: using defaults; {err}");
            SiteConfig::default()
        }
    }
}
