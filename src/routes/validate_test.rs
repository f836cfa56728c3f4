use super::*;

fn params(errors: &[FieldError]) -> Vec<&str> {
    errors.iter().filter_map(|e| e.param.as_deref()).collect()
}

#[test]
fn valid_registration_passes() {
    assert!(validate_register("Ann", "ann@x.com", "secret1").is_empty());
}

#[test]
fn register_reports_all_violations_together() {
    let errors = validate_register("  ", "not-an-email", "abc");
    assert_eq!(params(&errors), vec!["name", "email", "password"]);
}

#[test]
fn register_rejects_short_password() {
    let errors = validate_register("Ann", "ann@x.com", "abc12");
    assert_eq!(params(&errors), vec!["password"]);
}

#[test]
fn register_accepts_exactly_six_characters() {
    assert!(validate_register("Ann", "ann@x.com", "abc123").is_empty());
}

#[test]
fn register_counts_characters_not_bytes() {
    // Six multibyte characters satisfy the minimum length.
    assert!(validate_register("Ann", "ann@x.com", "éééééé").is_empty());
}

#[test]
fn register_rejects_malformed_email() {
    let errors = validate_register("Ann", "ann@", "secret1");
    assert_eq!(params(&errors), vec!["email"]);
}

#[test]
fn valid_login_passes() {
    assert!(validate_login("ann@x.com", "secret1").is_empty());
}

#[test]
fn login_requires_password_presence_only() {
    // Login does not enforce the registration length rule.
    assert!(validate_login("ann@x.com", "a").is_empty());
    let errors = validate_login("ann@x.com", "");
    assert_eq!(params(&errors), vec!["password"]);
}

#[test]
fn login_reports_both_fields() {
    let errors = validate_login("nope", "");
    assert_eq!(params(&errors), vec!["email", "password"]);
}
