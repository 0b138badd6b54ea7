//! Error type shared by every page component.
//!
//! Components never let these escape to the page: the entry point logs a
//! failed mount and moves on to the next component.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned while mounting or driving a page component.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// `window` is not available (not running in a browser).
    #[error("no global window")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// A required element is absent from the markup.
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },
    /// An element matched but is not the expected DOM interface.
    #[error("element `{selector}` is not a {expected}")]
    WrongElementType { selector: String, expected: &'static str },
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The embedded site config block could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }

    /// Accept a browser-reported number only when it is present and finite.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Js`] naming `what` otherwise.
    pub fn require_number(what: &str, value: Option<f64>) -> Result<f64, Self> {
        match value {
            Some(number) if number.is_finite() => Ok(number),
            _ => Err(Self::Js(format!("{what} is not a number"))),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
