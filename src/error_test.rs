use super::*;

#[test]
fn missing_element_names_selector() {
    let err = SiteError::missing("#contactForm");
    assert_eq!(err.to_string(), "missing required element: #contactForm");
}

#[test]
fn config_error_wraps_serde_error() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json");
    let Err(source) = parse else {
        panic!("malformed json should not parse");
    };
    let err = SiteError::from(source);
    assert!(matches!(err, SiteError::Config(_)));
    assert!(err.to_string().starts_with("invalid site config:"));
}

#[test]
fn environment_errors_have_stable_messages() {
    assert_eq!(SiteError::NoWindow.to_string(), "no window available");
    assert_eq!(SiteError::NoDocument.to_string(), "no document available");
    assert_eq!(SiteError::Js("boom".to_owned()).to_string(), "javascript error: boom");
}
