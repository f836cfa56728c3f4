use super::*;

#[test]
fn hash_and_verify_round_trip() {
    let hashed = hash_password("secret1").unwrap();
    assert!(verify_password("secret1", &hashed).unwrap());
}

#[test]
fn wrong_password_does_not_verify() {
    let hashed = hash_password("secret1").unwrap();
    assert!(!verify_password("wrong", &hashed).unwrap());
}

#[test]
fn hashes_are_salted_per_call() {
    let a = hash_password("secret1").unwrap();
    let b = hash_password("secret1").unwrap();
    assert_ne!(a, b);
}

#[test]
fn hash_never_contains_plaintext() {
    let hashed = hash_password("secret1").unwrap();
    assert!(!hashed.contains("secret1"));
}

#[test]
fn garbage_stored_hash_is_an_error() {
    assert!(verify_password("secret1", "not-a-bcrypt-hash").is_err());
}
