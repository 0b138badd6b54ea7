//! Default selectors, timings, and labels for the page.
//!
//! Every value here is a default for a field of [`crate::config::SiteConfig`]
//! and can be overridden by the page's embedded config block.

// ── Bootstrap ───────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute set on the root `<html>` element.
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_ICON_SELECTOR: &str = ".theme-icon";

/// Glyph shown while the dark theme is active.
pub const ICON_DARK: &str = "☀️";
/// Glyph shown while the light theme is active.
pub const ICON_LIGHT: &str = "🌙";

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_SELECTOR: &str =
    ".section-header, .service-card, .timeline-item, .portfolio-card, .testimonial-content, .contact-form";

/// Fraction of an element's area that must intersect before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Grows the viewport 300px downward so elements reveal just before entering view.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px 300px 0px";

/// Per-element transition delay step, in seconds.
pub const REVEAL_STAGGER_SECS: f64 = 0.1;

pub const VISIBLE_CLASS: &str = "visible";

// ── Portfolio strip ─────────────────────────────────────────────

pub const STRIP_SELECTOR: &str = ".portfolio-scroll";

/// Viewports at or below this width use the touch layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Content moves twice as far as the finger.
pub const DRAG_MULTIPLIER: f64 = 2.0;

pub const CARD_WIDTH_PX: f64 = 430.0;
pub const CARD_COUNT: u32 = 4;

/// Auto-scroll advance per animation frame.
pub const AUTO_SCROLL_SPEED_PX: f64 = 1.0;

pub const SCROLLED_CLASS: &str = "scrolled";

// ── Contact form ────────────────────────────────────────────────

pub const FORM_SELECTOR: &str = ".contact-form";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".submit-btn";
pub const SUBMIT_LABEL_SELECTOR: &str = "span";

pub const SENDING_LABEL: &str = "Sending…";
pub const SENT_LABEL: &str = "Sent! ✓";

/// Time spent in the "sending" state before reporting success.
pub const SENDING_DELAY_MS: u32 = 1500;
/// Time the success label stays up before the form resets.
pub const SENT_DELAY_MS: u32 = 2000;

// ── Anchors ─────────────────────────────────────────────────────

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// ── Parallax ────────────────────────────────────────────────────

pub const HERO_SELECTOR: &str = ".hero-content";

/// Hero moves at half the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.5;
