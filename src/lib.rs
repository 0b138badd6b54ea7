//! Page behavior for the marketing site, compiled to WebAssembly.
//!
//! Each component attaches to the document on its own and none of them call
//! into one another. Every component has a plain-Rust core (state and
//! arithmetic, tested natively) and a browser binding that exists only with
//! the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Dark/light preference, `localStorage`, toggle button |
//! | [`reveal`] | Staggered reveal of content blocks as they near the viewport |
//! | [`strip`] | Portfolio strip: hover pause, touch drag, or auto-scroll |
//! | [`contact`] | Simulated contact-form submission |
//! | [`anchor`] | Smooth scrolling for in-page links |
//! | [`parallax`] | Hero drift and fade on scroll |
//! | [`config`] | Embedded JSON config with per-component defaults |
//! | [`error`] | [`error::PageError`] shared by the bindings |
//! | [`startup`] | Which mounts run now and which wait for `DOMContentLoaded` |
//! | [`consts`] | Default selectors, timings, and labels |
//!
//! ## Startup
//!
//! [`start`] runs when the module is instantiated. The theme attribute is
//! applied immediately so the page never flashes the default theme; the
//! toggle button and the remaining components mount once the DOM is parsed
//! (see [`startup::plan`]). A component whose markup is missing is logged
//! and skipped.

pub mod anchor;
pub mod config;
pub mod consts;
pub mod contact;
#[cfg(feature = "hydrate")]
mod dom;
pub mod error;
pub mod parallax;
pub mod reveal;
pub mod startup;
pub mod strip;
pub mod theme;

#[cfg(feature = "hydrate")]
pub use browser::start;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::{AddEventListenerOptions, Document, Event, Window};

    use crate::config::{self, SiteConfig};
    use crate::error::PageError;
    use crate::startup::{self, Step};
    use crate::{anchor, contact, dom, parallax, reveal, strip, theme};

    fn report(component: &str, result: Result<(), PageError>) {
        match result {
            Ok(()) => log::debug!("{component}: mounted"),
            Err(err) => log::warn!("{component}: skipped; {err}"),
        }
    }

    struct Page {
        window: Window,
        document: Document,
        config: SiteConfig,
        theme: Option<theme::ThemeBinding>,
    }

    impl Page {
        fn run(&mut self, step: Step) {
            let (window, document, config) = (&self.window, &self.document, &self.config);
            let result = match step {
                Step::ThemeAttribute => match theme::apply_initial(window, document, &config.theme) {
                    Ok(binding) => {
                        self.theme = Some(binding);
                        Ok(())
                    }
                    Err(err) => Err(err),
                },
                Step::ThemeToggle => match &self.theme {
                    Some(binding) => theme::mount(document, &config.theme, binding),
                    None => {
                        log::debug!("theme: no applied theme; toggle not wired");
                        return;
                    }
                },
                Step::Reveal => reveal::mount(document, &config.reveal),
                Step::Strip => strip::mount(window, document, &config.strip),
                Step::Contact => contact::mount(document, &config.contact),
                Step::Anchor => anchor::mount(document, &config.anchor),
                Step::Parallax => parallax::mount(window, document, &config.parallax),
            };
            report(step.name(), result);
        }
    }

    fn boot() -> Result<(), PageError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let config = config::load(&document);
        log::set_max_level(config.log_level.filter());

        let plan = startup::plan(&document.ready_state());
        let mut page = Page { window, document: document.clone(), config, theme: None };
        for step in plan.now {
            page.run(step);
        }
        if plan.deferred.is_empty() {
            return Ok(());
        }

        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let mut deferred = plan.deferred;
        dom::listen_with(&document, "DOMContentLoaded", &options, move |_: Event| {
            for step in deferred.drain(..) {
                page.run(step);
            }
        })
    }

    /// WASM entry point.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Trace).is_err() {
            log::debug!("logger already installed");
        }
        log::set_max_level(log::LevelFilter::Info);

        if let Err(err) = boot() {
            log::error!("page behavior disabled: {err}");
        }
    }
}
