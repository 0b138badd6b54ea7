//! Horizontal portfolio strip: hover, touch-drag, and auto-scroll.
//!
//! Two behaviors exist for the same widget and exactly one is active per
//! page, chosen by [`StripPolicy`]:
//!
//! - [`StripPolicy::PauseOnHover`] (default): on desktop the CSS marquee
//!   animation pauses while hovered; on touch layouts a finger drag scrolls
//!   the strip at twice the finger's speed, and the first scroll marks the
//!   strip as scrolled.
//! - [`StripPolicy::AutoScroll`]: hovering starts a frame loop advancing the
//!   strip by a fixed step and wrapping after one full run of cards.
//!   Leaving cancels the pending frame.

#[cfg(test)]
#[path = "strip_test.rs"]
mod strip_test;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StripPolicy {
    #[default]
    PauseOnHover,
    AutoScroll,
}

/// Input layout, decided once from the viewport width at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Touch,
}

impl Layout {
    #[must_use]
    pub fn for_width(viewport_width: f64, breakpoint_px: f64) -> Self {
        if viewport_width > breakpoint_px { Self::Desktop } else { Self::Touch }
    }
}

/// One finger drag, from touch-start to touch-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Touch x relative to the strip's left edge at touch-start.
    pub start_x: f64,
    /// Strip `scrollLeft` at touch-start.
    pub base_offset: f64,
}

impl DragSession {
    /// Scroll offset for a finger now at `x`. Dragging right moves content right.
    #[must_use]
    pub fn offset_at(&self, x: f64, multiplier: f64) -> f64 {
        let walk = (x - self.start_x) * multiplier;
        self.base_offset - walk
    }
}

/// Touch-drag state for the strip. Active while a session exists.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
    multiplier: f64,
}

impl DragTracker {
    #[must_use]
    pub fn new(multiplier: f64) -> Self {
        Self { session: None, multiplier }
    }

    pub fn begin(&mut self, start_x: f64, base_offset: f64) {
        self.session = Some(DragSession { start_x, base_offset });
    }

    /// New scroll offset for a move to `x`, or `None` when no drag is active.
    #[must_use]
    pub fn move_to(&self, x: f64) -> Option<f64> {
        self.session.map(|s| s.offset_at(x, self.multiplier))
    }

    pub fn end(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

/// Continuous hover-driven scroll that wraps after one run of cards.
#[derive(Debug, Clone)]
pub struct AutoScroll {
    offset: f64,
    speed: f64,
    limit: f64,
    active: bool,
}

impl AutoScroll {
    #[must_use]
    pub fn new(speed_px: f64, card_width_px: f64, card_count: u32) -> Self {
        Self {
            offset: 0.0,
            speed: speed_px.max(0.0),
            limit: (card_width_px * f64::from(card_count)).max(0.0),
            active: false,
        }
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Total distance of one loop, `card_width × card_count`.
    #[must_use]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Advance one frame. Returns the new offset, or `None` when stopped.
    pub fn tick(&mut self) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.offset += self.speed;
        if self.offset >= self.limit {
            self.offset = 0.0;
        }
        Some(self.offset)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, closure::Closure};
    use web_sys::{AddEventListenerOptions, Document, Event, HtmlElement, MouseEvent, TouchEvent, Window};

    use super::{AutoScroll, DragTracker, Layout, StripPolicy};
    use crate::config::StripConfig;
    use crate::dom;
    use crate::error::PageError;

    /// Wire the strip according to the configured policy.
    pub fn mount(window: &Window, document: &Document, config: &StripConfig) -> Result<(), PageError> {
        let strip = dom::query(document, &config.selector)?;
        let strip: HtmlElement = dom::cast(strip, &config.selector, "HtmlElement")?;
        match config.policy {
            StripPolicy::PauseOnHover => {
                let (width, _) = dom::viewport(window)?;
                match Layout::for_width(width, config.mobile_breakpoint_px) {
                    Layout::Desktop => mount_hover_pause(&strip),
                    Layout::Touch => mount_touch_drag(&strip, config),
                }
            }
            StripPolicy::AutoScroll => mount_auto_scroll(window, &strip, config),
        }
    }

    fn set_play_state(strip: &HtmlElement, state: &str) {
        if let Err(err) = strip.style().set_property("animation-play-state", state) {
            log::warn!("strip: {}", PageError::from(err));
        }
    }

    fn mount_hover_pause(strip: &HtmlElement) -> Result<(), PageError> {
        let target = strip.clone();
        dom::listen(strip, "mouseenter", move |_: MouseEvent| set_play_state(&target, "paused"))?;
        let target = strip.clone();
        dom::listen(strip, "mouseleave", move |_: MouseEvent| set_play_state(&target, "running"))?;
        log::debug!("strip: hover pauses animation");
        Ok(())
    }

    /// Finger x relative to the strip's left edge.
    fn touch_x(strip: &HtmlElement, ev: &TouchEvent) -> Option<f64> {
        let touch = ev.touches().get(0)?;
        Some(f64::from(touch.page_x()) - f64::from(strip.offset_left()))
    }

    fn mount_touch_drag(strip: &HtmlElement, config: &StripConfig) -> Result<(), PageError> {
        let tracker = Rc::new(RefCell::new(DragTracker::new(config.drag_multiplier)));

        let (target, state) = (strip.clone(), Rc::clone(&tracker));
        dom::listen(strip, "touchstart", move |ev: TouchEvent| {
            if let Some(x) = touch_x(&target, &ev) {
                state.borrow_mut().begin(x, f64::from(target.scroll_left()));
            }
        })?;

        for event in ["touchend", "touchcancel"] {
            let state = Rc::clone(&tracker);
            dom::listen(strip, event, move |_: TouchEvent| state.borrow_mut().end())?;
        }

        // preventDefault needs a non-passive listener.
        let active_opts = AddEventListenerOptions::new();
        active_opts.set_passive(false);
        let (target, state) = (strip.clone(), Rc::clone(&tracker));
        dom::listen_with(strip, "touchmove", &active_opts, move |ev: TouchEvent| {
            let state = state.borrow();
            if !state.is_active() {
                return;
            }
            ev.prevent_default();
            if let Some(offset) = touch_x(&target, &ev).and_then(|x| state.move_to(x)) {
                target.set_scroll_left(dom::to_px(offset));
            }
        })?;

        let once_opts = AddEventListenerOptions::new();
        once_opts.set_once(true);
        let (target, class) = (strip.clone(), config.scrolled_class.clone());
        dom::listen_with(strip, "scroll", &once_opts, move |_: Event| {
            if let Err(err) = target.class_list().add_1(&class) {
                log::warn!("strip: {}", PageError::from(err));
            }
        })?;
        log::debug!("strip: touch drag enabled");
        Ok(())
    }

    struct AutoScrollLoop {
        scroll: AutoScroll,
        frame: Option<i32>,
    }

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, PageError> {
        let callback = callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return Err(PageError::Js("frame callback not installed".to_owned()));
        };
        Ok(window.request_animation_frame(cb.as_ref().unchecked_ref())?)
    }

    fn schedule(window: &Window, callback: &FrameCallback, state: &mut AutoScrollLoop) {
        match request_frame(window, callback) {
            Ok(id) => state.frame = Some(id),
            Err(err) => {
                log::warn!("strip: auto-scroll stopped; {err}");
                state.scroll.stop();
            }
        }
    }

    fn mount_auto_scroll(window: &Window, strip: &HtmlElement, config: &StripConfig) -> Result<(), PageError> {
        let state = Rc::new(RefCell::new(AutoScrollLoop {
            scroll: AutoScroll::new(config.speed_px, config.card_width_px, config.card_count),
            frame: None,
        }));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let (win, target, loop_state, self_ref) =
            (window.clone(), strip.clone(), Rc::clone(&state), Rc::clone(&callback));
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            let mut state = loop_state.borrow_mut();
            state.frame = None;
            let Some(offset) = state.scroll.tick() else {
                return;
            };
            target.set_scroll_left(dom::to_px(offset));
            schedule(&win, &self_ref, &mut state);
        }) as Box<dyn FnMut(f64)>));

        let (win, loop_state, frame_cb) = (window.clone(), Rc::clone(&state), Rc::clone(&callback));
        dom::listen(strip, "mouseenter", move |_: MouseEvent| {
            let mut state = loop_state.borrow_mut();
            state.scroll.start();
            if state.frame.is_none() {
                schedule(&win, &frame_cb, &mut state);
            }
        })?;

        let (win, loop_state) = (window.clone(), Rc::clone(&state));
        dom::listen(strip, "mouseleave", move |_: MouseEvent| {
            let mut state = loop_state.borrow_mut();
            state.scroll.stop();
            if let Some(id) = state.frame.take() {
                if let Err(err) = win.cancel_animation_frame(id) {
                    log::warn!("strip: {}", PageError::from(err));
                }
            }
        })?;
        log::debug!("strip: auto-scroll on hover, wraps at {}px", state.borrow().scroll.limit());
        Ok(())
    }
}
