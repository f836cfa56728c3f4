use super::*;
use crate::routes::test_helpers::spawn_test_server;
use crate::state::test_helpers::test_app_state;

// =============================================================================
// Rejection parsing
// =============================================================================

#[test]
fn status_401_maps_to_unauthorized() {
    let err = rejection_from_parts(401, r#"{"msg":"Token is not valid"}"#);
    assert!(matches!(err, ClientError::Unauthorized));
}

#[test]
fn status_400_with_error_list_maps_to_rejected() {
    let body = r#"{"errors":[{"msg":"Please include a valid email","param":"email"},{"msg":"Invalid credentials"}]}"#;
    let ClientError::Rejected(errors) = rejection_from_parts(400, body) else {
        panic!("expected Rejected");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].param.as_deref(), Some("email"));
    assert_eq!(errors[1].msg, "Invalid credentials");
    assert!(errors[1].param.is_none());
}

#[test]
fn status_400_with_unparseable_body_maps_to_unexpected() {
    let err = rejection_from_parts(400, "<html>nope</html>");
    assert!(matches!(err, ClientError::Unexpected(400)));
}

#[test]
fn status_500_maps_to_unexpected() {
    let err = rejection_from_parts(500, r#"{"msg":"Server error"}"#);
    assert!(matches!(err, ClientError::Unexpected(500)));
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://localhost:3000/");
    assert_eq!(client.base_url, "http://localhost:3000");
}

// =============================================================================
// Against a live router (no DB: every path below rejects server-side before
// touching storage)
// =============================================================================

#[tokio::test]
async fn me_with_bad_token_is_unauthorized() {
    let base = spawn_test_server(test_app_state()).await;
    let client = ApiClient::new(&base);
    let err = client.me("garbage").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn register_with_invalid_body_reports_fields() {
    let base = spawn_test_server(test_app_state()).await;
    let client = ApiClient::new(&base);
    let err = client.register("", "nope", "abc").await.unwrap_err();
    let ClientError::Rejected(errors) = err else {
        panic!("expected Rejected");
    };
    let params: Vec<_> = errors.iter().filter_map(|e| e.param.as_deref()).collect();
    assert_eq!(params, vec!["name", "email", "password"]);
}

#[tokio::test]
async fn login_with_invalid_body_reports_fields() {
    let base = spawn_test_server(test_app_state()).await;
    let client = ApiClient::new(&base);
    let err = client.login("nope", "").await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(ref e) if e.len() == 2));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = client.login("ann@x.com", "secret1").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
