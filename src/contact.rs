//! Simulated contact-form submission.
//!
//! Submitting never touches the network. The button label walks through
//! `Idle → Sending → Sent → Idle` on two fixed timers, after which the form
//! is reset. A submit arriving while a sequence is still running is ignored.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::config::ContactConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Submit sequence for one form.
#[derive(Debug, Clone, Default)]
pub struct SubmitMachine {
    phase: SubmitPhase,
    original_label: Option<String>,
}

impl SubmitMachine {
    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// The submit button is disabled whenever a sequence is running.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }

    /// Start a sequence, remembering the label to restore.
    ///
    /// Returns `false` and changes nothing if a sequence is already running.
    pub fn submit(&mut self, original_label: &str) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = SubmitPhase::Sending;
        self.original_label = Some(original_label.to_owned());
        true
    }

    /// `Sending → Sent`. Returns `false` from any other phase.
    pub fn mark_sent(&mut self) -> bool {
        if self.phase != SubmitPhase::Sending {
            return false;
        }
        self.phase = SubmitPhase::Sent;
        true
    }

    /// `Sent → Idle`. The original label stays available through [`Self::label`].
    pub fn finish(&mut self) -> bool {
        if self.phase != SubmitPhase::Sent {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        true
    }

    /// Step to the next phase when its timer fires. Returns `false` when idle.
    pub fn advance(&mut self) -> bool {
        match self.phase {
            SubmitPhase::Idle => false,
            SubmitPhase::Sending => self.mark_sent(),
            SubmitPhase::Sent => self.finish(),
        }
    }

    /// How long the current phase lasts before [`Self::advance`] is due.
    /// `None` when idle.
    #[must_use]
    pub fn next_delay_ms(&self, config: &ContactConfig) -> Option<u32> {
        match self.phase {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some(config.sending_delay_ms),
            SubmitPhase::Sent => Some(config.sent_delay_ms),
        }
    }

    /// Label the button should show in the current phase. While idle this is
    /// the label captured by the last submit, if any.
    #[must_use]
    pub fn label<'a>(&'a self, config: &'a ContactConfig) -> Option<&'a str> {
        match self.phase {
            SubmitPhase::Idle => self.original_label.as_deref(),
            SubmitPhase::Sending => Some(config.sending_label.as_str()),
            SubmitPhase::Sent => Some(config.sent_label.as_str()),
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement};

    use super::{SubmitMachine, SubmitPhase};
    use crate::config::ContactConfig;
    use crate::dom;
    use crate::error::PageError;

    struct SubmitParts {
        form: HtmlFormElement,
        button: HtmlButtonElement,
        label: Element,
    }

    /// The matched element may be the `<form>` itself or a wrapper around it.
    fn find_form(document: &Document, selector: &str) -> Result<HtmlFormElement, PageError> {
        let matched = dom::query(document, selector)?;
        if matched.tag_name().eq_ignore_ascii_case("form") {
            return dom::cast(matched, selector, "HtmlFormElement");
        }
        let inner = dom::query_within(&matched, "form")?;
        dom::cast(inner, selector, "HtmlFormElement")
    }

    fn find_parts(form: &HtmlFormElement, config: &ContactConfig) -> Result<SubmitParts, PageError> {
        let button = dom::query_within(form, &config.button_selector)?;
        let button: HtmlButtonElement = dom::cast(button, &config.button_selector, "HtmlButtonElement")?;
        let label = dom::query_within(&button, &config.label_selector)?;
        Ok(SubmitParts { form: form.clone(), button, label })
    }

    fn render(parts: &SubmitParts, machine: &SubmitMachine, config: &ContactConfig) {
        if let Some(label) = machine.label(config) {
            parts.label.set_text_content(Some(label));
        }
        parts.button.set_disabled(machine.is_busy());
    }

    /// Arm the timer for the current phase; each firing advances, renders,
    /// and re-arms until the machine is idle again.
    fn schedule_next(parts: Rc<SubmitParts>, machine: Rc<RefCell<SubmitMachine>>, config: Rc<ContactConfig>) {
        let Some(delay) = machine.borrow().next_delay_ms(&config) else {
            return;
        };
        Timeout::new(delay, move || {
            if !machine.borrow_mut().advance() {
                return;
            }
            render(&parts, &machine.borrow(), &config);
            if machine.borrow().phase() == SubmitPhase::Idle {
                parts.form.reset();
                log::debug!("contact: form reset");
            }
            schedule_next(parts, machine, config);
        })
        .forget();
    }

    fn on_submit(
        form: &HtmlFormElement,
        machine: &Rc<RefCell<SubmitMachine>>,
        config: &Rc<ContactConfig>,
    ) -> Result<(), PageError> {
        let parts = find_parts(form, config)?;
        let original = parts.label.text_content().unwrap_or_default();
        if !machine.borrow_mut().submit(&original) {
            log::debug!("contact: submit ignored, previous submission still pending");
            return Ok(());
        }
        render(&parts, &machine.borrow(), config);
        log::info!("contact: simulated submission started");
        schedule_next(Rc::new(parts), Rc::clone(machine), Rc::clone(config));
        Ok(())
    }

    /// Intercept submits on the contact form.
    pub fn mount(document: &Document, config: &ContactConfig) -> Result<(), PageError> {
        let form = find_form(document, &config.form_selector)?;
        find_parts(&form, config)?;

        let machine = Rc::new(RefCell::new(SubmitMachine::default()));
        let config = Rc::new(config.clone());
        let target = form.clone();
        dom::listen(&form, "submit", move |ev: Event| {
            ev.prevent_default();
            if let Err(err) = on_submit(&target, &machine, &config) {
                log::warn!("contact: {err}");
            }
        })
    }
}
