//! Scroll-triggered reveal of content blocks.
//!
//! Matching elements get a staggered `transition-delay` and are watched by
//! one `IntersectionObserver`. Once an element intersects it receives the
//! visible class and is no longer watched; the class is never removed.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// CSS `transition-delay` for the element at `index` in selection order.
///
/// Rounded to the millisecond so `3 × 0.1` renders as `0.3s`.
#[must_use]
pub fn stagger_delay(index: u32, step_secs: f64) -> String {
    let secs = (f64::from(index) * step_secs * 1000.0).round() / 1000.0;
    format!("{secs}s")
}

/// Monotonic visibility flags for the observed elements.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    visible: Vec<bool>,
}

impl RevealSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { visible: vec![false; len] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Mark `index` visible. Returns `true` only the first time.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.visible.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Reveal every index in one observer notification. Returns the indices
    /// that became visible now, in notification order, without repeats.
    pub fn reveal_batch(&mut self, indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
        indices.into_iter().filter(|index| self.reveal(*index)).collect()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Array;
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{RevealSet, stagger_delay};
    use crate::config::RevealConfig;
    use crate::dom;
    use crate::error::PageError;

    struct Revealer {
        elements: Vec<Element>,
        flags: RevealSet,
        visible_class: String,
    }

    impl Revealer {
        fn handle(&mut self, entries: &Array, observer: &IntersectionObserver) {
            let intersecting: Vec<usize> = entries
                .iter()
                .filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().cloned())
                .filter(IntersectionObserverEntry::is_intersecting)
                .filter_map(|entry| self.elements.iter().position(|el| *el == entry.target()))
                .collect();

            for index in self.flags.reveal_batch(intersecting) {
                let Some(el) = self.elements.get(index) else {
                    continue;
                };
                if let Err(err) = el.class_list().add_1(&self.visible_class) {
                    log::warn!("reveal: element {index}: {}", PageError::from(err));
                }
                observer.unobserve(el);
                log::trace!("reveal: element {index} visible ({}/{})", self.flags.revealed_count(), self.flags.len());
            }
        }
    }

    /// Stagger and observe every element matching the reveal selector.
    pub fn mount(document: &Document, config: &RevealConfig) -> Result<(), PageError> {
        let elements = dom::query_all(document, &config.selector)?;
        if elements.is_empty() {
            log::debug!("reveal: nothing matches `{}`", config.selector);
            return Ok(());
        }

        for (index, el) in (0_u32..).zip(&elements) {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let delay = stagger_delay(index, config.stagger_secs);
                if let Err(err) = html.style().set_property("transition-delay", &delay) {
                    log::warn!("reveal: element {index}: no stagger; {}", PageError::from(err));
                }
            }
        }

        let revealer = Rc::new(RefCell::new(Revealer {
            flags: RevealSet::new(elements.len()),
            elements: elements.clone(),
            visible_class: config.visible_class.clone(),
        }));
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            revealer.borrow_mut().handle(&entries, &observer);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        for el in &elements {
            observer.observe(el);
        }
        log::debug!("reveal: observing {} elements", elements.len());
        Ok(())
    }
}
