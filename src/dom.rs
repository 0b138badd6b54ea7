//! Thin web-sys helpers shared by the component bindings.
//!
//! Lookups return [`PageError`] instead of `Option` so bindings can use `?`
//! and the entry point decides how loudly to report a missing element.
//! Listeners installed here live for the rest of the page.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, Window};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::NoDocument)
}

/// First element under `document` matching `selector`.
pub fn query(document: &Document, selector: &str) -> Result<Element, PageError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| PageError::missing(selector))
}

/// First element under `parent` matching `selector`.
pub fn query_within(parent: &Element, selector: &str) -> Result<Element, PageError> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| PageError::missing(selector))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Downcast an element to a concrete interface, naming it on failure.
pub fn cast<T: JsCast>(element: Element, selector: &str, expected: &'static str) -> Result<T, PageError> {
    element
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType { selector: selector.to_owned(), expected })
}

/// Viewport width and height in CSS pixels.
pub fn viewport(window: &Window) -> Result<(f64, f64), PageError> {
    let width = PageError::require_number("innerWidth", window.inner_width()?.as_f64())?;
    let height = PageError::require_number("innerHeight", window.inner_height()?.as_f64())?;
    Ok((width, height))
}

/// Round a pixel offset to the integer the scroll APIs accept.
#[allow(clippy::cast_possible_truncation)]
pub fn to_px(value: f64) -> i32 {
    value.round() as i32
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], with explicit listener options (`once`, `passive`).
pub fn listen_with<E, F>(
    target: &EventTarget,
    event: &str,
    options: &AddEventListenerOptions,
    handler: F,
) -> Result<(), PageError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        options,
    )?;
    closure.forget();
    Ok(())
}
