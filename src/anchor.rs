//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id referenced by an in-page `href`, e.g. `"#contact"` → `"contact"`.
///
/// A bare `#` or an `href` that is not a fragment yields `None`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use super::fragment_target;
    use crate::config::AnchorConfig;
    use crate::dom;
    use crate::error::PageError;

    fn scroll_to(document: &Document, anchor: &Element) {
        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id)) else {
            log::debug!("anchor: `{href}` resolves to nothing");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// Attach a smooth-scroll click handler to every fragment link.
    pub fn mount(document: &Document, config: &AnchorConfig) -> Result<(), PageError> {
        let anchors = dom::query_all(document, &config.selector)?;
        for anchor in &anchors {
            let (doc, link) = (document.clone(), anchor.clone());
            dom::listen(anchor, "click", move |ev: MouseEvent| {
                ev.prevent_default();
                scroll_to(&doc, &link);
            })?;
        }
        log::debug!("anchor: {} links wired", anchors.len());
        Ok(())
    }
}
