use super::*;

#[test]
fn missing_element_names_selector() {
    let err = PageError::missing(".hero-content");
    assert_eq!(err.to_string(), "no element matches `.hero-content`");
}

#[test]
fn wrong_element_type_names_expected_interface() {
    let err = PageError::WrongElementType { selector: ".submit-btn".to_owned(), expected: "HtmlButtonElement" };
    assert_eq!(err.to_string(), "element `.submit-btn` is not a HtmlButtonElement");
}

#[test]
fn config_error_wraps_serde_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = PageError::from(serde_err);
    assert!(matches!(err, PageError::Config(_)));
    assert!(err.to_string().starts_with("invalid site config:"));
}

// =============================================================
// Browser numbers
// =============================================================

#[test]
fn require_number_passes_finite_values_through() {
    assert_eq!(PageError::require_number("innerWidth", Some(1280.0)).unwrap(), 1280.0);
    assert_eq!(PageError::require_number("innerHeight", Some(0.0)).unwrap(), 0.0);
}

#[test]
fn require_number_rejects_missing_value() {
    let err = PageError::require_number("innerWidth", None).unwrap_err();
    assert!(matches!(err, PageError::Js(_)));
    assert_eq!(err.to_string(), "browser call failed: innerWidth is not a number");
}

#[test]
fn require_number_rejects_non_finite_values() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = PageError::require_number("innerHeight", Some(bad)).unwrap_err();
        assert_eq!(err.to_string(), "browser call failed: innerHeight is not a number");
    }
}
