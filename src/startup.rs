//! Mount order for the page components.
//!
//! Only the root theme attribute can be applied while the document is still
//! loading; everything that looks up body elements waits for
//! `DOMContentLoaded`.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `data-theme` on `<html>`, read from storage.
    ThemeAttribute,
    /// Toggle icon and click handler.
    ThemeToggle,
    Reveal,
    Strip,
    Contact,
    Anchor,
    Parallax,
}

impl Step {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ThemeAttribute | Self::ThemeToggle => "theme",
            Self::Reveal => "reveal",
            Self::Strip => "strip",
            Self::Contact => "contact",
            Self::Anchor => "anchor",
            Self::Parallax => "parallax",
        }
    }

    /// Whether the step looks up elements inside `<body>`.
    #[must_use]
    pub fn needs_body(self) -> bool {
        !matches!(self, Self::ThemeAttribute)
    }
}

/// All steps in mount order.
pub const STEPS: [Step; 7] = [
    Step::ThemeAttribute,
    Step::ThemeToggle,
    Step::Reveal,
    Step::Strip,
    Step::Contact,
    Step::Anchor,
    Step::Parallax,
];

/// Steps to run immediately and steps to defer until the DOM is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub now: Vec<Step>,
    pub deferred: Vec<Step>,
}

/// Split [`STEPS`] by the document's `readyState`.
#[must_use]
pub fn plan(ready_state: &str) -> Plan {
    if ready_state != "loading" {
        return Plan { now: STEPS.to_vec(), deferred: Vec::new() };
    }
    let (deferred, now) = STEPS.iter().partition(|step| step.needs_body());
    Plan { now, deferred }
}
