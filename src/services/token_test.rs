use super::*;

fn service() -> TokenService {
    TokenService::new("test-secret")
}

#[test]
fn issue_verify_round_trip() {
    let svc = service();
    let subject = Uuid::new_v4();
    let token = svc.issue(subject).unwrap();
    assert_eq!(svc.verify(&token).unwrap(), subject);
}

#[test]
fn expired_token_fails_verification() {
    let svc = service();
    let token = svc
        .issue_with_ttl(Uuid::new_v4(), Duration::seconds(-5))
        .unwrap();
    assert!(matches!(svc.verify(&token), Err(TokenError::Invalid)));
}

#[test]
fn malformed_token_fails_verification() {
    let svc = service();
    assert!(matches!(svc.verify("not.a.token"), Err(TokenError::Invalid)));
    assert!(matches!(svc.verify(""), Err(TokenError::Invalid)));
}

#[test]
fn token_signed_with_other_key_fails_verification() {
    let subject = Uuid::new_v4();
    let token = TokenService::new("other-secret").issue(subject).unwrap();
    assert!(matches!(service().verify(&token), Err(TokenError::Invalid)));
}

#[test]
fn tampered_token_fails_verification() {
    let svc = service();
    let mut token = svc.issue(Uuid::new_v4()).unwrap();
    // Flip a character in the signature segment.
    let flipped = if token.ends_with('a') { 'b' } else { 'a' };
    token.pop();
    token.push(flipped);
    assert!(matches!(svc.verify(&token), Err(TokenError::Invalid)));
}

#[test]
fn tokens_bind_distinct_subjects() {
    let svc = service();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let token_a = svc.issue(a).unwrap();
    let token_b = svc.issue(b).unwrap();
    assert_eq!(svc.verify(&token_a).unwrap(), a);
    assert_eq!(svc.verify(&token_b).unwrap(), b);
}
