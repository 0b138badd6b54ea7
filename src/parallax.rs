//! Hero parallax: the hero drifts down and fades while the first viewport scrolls away.
//!
//! Styles are written only while the scroll offset is inside the first
//! viewport height. Past that the hero keeps whatever was last written.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxStyle {
    /// Vertical translation in CSS pixels.
    pub translate_y: f64,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl ParallaxStyle {
    /// Style for `offset` pixels of vertical scroll, or `None` outside the active range.
    #[must_use]
    pub fn at(offset: f64, viewport_height: f64, factor: f64) -> Option<Self> {
        if viewport_height <= 0.0 || offset >= viewport_height {
            return None;
        }
        Some(Self {
            translate_y: offset * factor,
            opacity: (1.0 - offset / viewport_height).min(1.0),
        })
    }

    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Event, HtmlElement, Window};

    use super::ParallaxStyle;
    use crate::config::ParallaxConfig;
    use crate::dom;
    use crate::error::PageError;

    fn update(window: &Window, hero: &HtmlElement, factor: f64) -> Result<(), PageError> {
        let offset = window.scroll_y()?;
        let (_, height) = dom::viewport(window)?;
        if let Some(style) = ParallaxStyle::at(offset, height, factor) {
            let css = hero.style();
            for (name, value) in [("transform", style.transform()), ("opacity", style.opacity.to_string())] {
                if let Err(err) = css.set_property(name, &value) {
                    log::warn!("parallax: could not set {name}: {}", PageError::from(err));
                }
            }
        }
        Ok(())
    }

    /// Drive the hero's transform and opacity from window scroll.
    pub fn mount(window: &Window, document: &Document, config: &ParallaxConfig) -> Result<(), PageError> {
        let hero = dom::query(document, &config.hero_selector)?;
        let hero: HtmlElement = dom::cast(hero, &config.hero_selector, "HtmlElement")?;
        let (win, factor) = (window.clone(), config.factor);
        dom::listen(window, "scroll", move |_: Event| {
            if let Err(err) = update(&win, &hero, factor) {
                log::warn!("parallax: {err}");
            }
        })
    }
}
