use super::*;

#[test]
fn blank_input_yields_defaults() {
    assert_eq!(SiteConfig::from_json("").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.reveal.root_margin, "0px 0px 300px 0px");
    assert_eq!(cfg.strip.policy, StripPolicy::PauseOnHover);
    assert_eq!(cfg.contact.sending_delay_ms, 1500);
    assert_eq!(cfg.contact.sent_delay_ms, 2000);
    assert_eq!(cfg.parallax.hero_selector, ".hero-content");
}

#[test]
fn partial_section_overrides_only_named_fields() {
    let cfg = SiteConfig::from_json(r#"{ "contact": { "sendingLabel": "Wysyłanie...", "sentLabel": "Wysłano! ✓" } }"#)
        .unwrap();
    assert_eq!(cfg.contact.sending_label, "Wysyłanie...");
    assert_eq!(cfg.contact.sent_label, "Wysłano! ✓");
    assert_eq!(cfg.contact.form_selector, ".contact-form");
    assert_eq!(cfg.contact.sending_delay_ms, 1500);
    assert_eq!(cfg.strip, StripConfig::default());
}

#[test]
fn strip_policy_names_parse() {
    let cfg = SiteConfig::from_json(r#"{ "strip": { "policy": "auto-scroll", "cardCount": 6 } }"#).unwrap();
    assert_eq!(cfg.strip.policy, StripPolicy::AutoScroll);
    assert_eq!(cfg.strip.card_count, 6);
    assert!((cfg.strip.card_width_px - 430.0).abs() < f64::EPSILON);

    let cfg = SiteConfig::from_json(r#"{ "strip": { "policy": "pause-on-hover" } }"#).unwrap();
    assert_eq!(cfg.strip.policy, StripPolicy::PauseOnHover);
}

#[test]
fn log_level_parses_lowercase() {
    let cfg = SiteConfig::from_json(r#"{ "logLevel": "debug" }"#).unwrap();
    assert_eq!(cfg.log_level, LogLevel::Debug);
}

#[test]
fn unknown_policy_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "strip": { "policy": "marquee" } }"#).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(SiteConfig::from_json("{ logLevel"), Err(PageError::Config(_))));
}

#[test]
fn wrong_field_type_is_rejected() {
    assert!(SiteConfig::from_json(r#"{ "contact": { "sentDelayMs": "soon" } }"#).is_err());
}
