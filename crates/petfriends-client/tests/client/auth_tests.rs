// crates/petfriends-client/tests/client/auth_tests.rs
// ============================================================================
// Module: Auth Key Tests
// Description: Wire shape and reply surfacing for the key endpoint.
// ============================================================================

use petfriends_client::ApiOutcome;
use petfriends_client::Credentials;
use serde_json::json;

use crate::common::CannedReply;
use crate::common::client_for;
use crate::common::spawn_server;

#[test]
fn get_api_key_sends_credentials_as_headers() {
    let server = spawn_server(vec![CannedReply::json(200, &json!({"key": "k-123"}))]);
    let client = client_for(&server);

    let response =
        client.get_api_key(&Credentials::new("owner@example.com", "s3cret")).expect("call");

    assert_eq!(response.status, 200);
    assert_eq!(response.auth_key().map(|key| key.as_str().to_string()).as_deref(), Some("k-123"));

    let requests = server.finish();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "/api/key");
    assert_eq!(request.header("email"), Some("owner@example.com"));
    assert_eq!(request.header("password"), Some("s3cret"));
    assert!(request.header("auth_key").is_none());
}

#[test]
fn rejected_credentials_surface_403_verbatim() {
    let page = "<html><body>This user wasn't found in database</body></html>";
    let server = spawn_server(vec![CannedReply::html(403, page)]);
    let client = client_for(&server);

    let response = client.get_api_key(&Credentials::new("nobody@example.com", "nope")).unwrap();

    assert_eq!(response.status, 403);
    assert_eq!(response.body.as_text(), Some(page));
    assert!(response.auth_key().is_none());
    match response.outcome() {
        ApiOutcome::Failure {
            status,
            body,
        } => {
            assert_eq!(status, 403);
            assert!(!body.has_field("key"));
        }
        ApiOutcome::Success(_) => panic!("403 must be a failure"),
    }
    server.finish();
}

#[test]
fn json_error_bodies_are_kept_as_json() {
    let server = spawn_server(vec![CannedReply::json(403, &json!({"error": "forbidden"}))]);
    let client = client_for(&server);

    let response = client.get_api_key(&Credentials::new("a@b.c", "d")).unwrap();

    assert_eq!(response.status, 403);
    assert_eq!(response.body.str_field("error"), Some("forbidden"));
    assert!(response.auth_key().is_none());
    server.finish();
}
