//! Mock server helpers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use youtu_sdk::{ApiFamily, YoutuClient};

use super::fixtures::test_credential;

/// Path of an operation on the mock server.
pub fn operation_path(family: ApiFamily, operation: &str) -> String {
    format!("/youtu/{}/{operation}", family.segment())
}

/// Mounts a mock answering `operation` with `body` and expecting one call.
pub async fn mock_operation(server: &MockServer, family: ApiFamily, operation: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(operation_path(family, operation)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts a mock answering any POST with a raw template.
pub async fn mock_any(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> YoutuClient {
    YoutuClient::builder()
        .credential(test_credential())
        .custom_host(server.uri())
        .build()
        .expect("Failed to build client")
}

/// JSON body of the only request the server received.
pub async fn sent_body(server: &MockServer) -> Value {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}

/// Authorization header of the only request the server received.
pub async fn sent_token(server: &MockServer) -> String {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    requests[0]
        .headers
        .get("authorization")
        .expect("authorization header")
        .to_str()
        .expect("ascii token")
        .to_string()
}

/// Splits a token into its HMAC digest and canonical string.
pub fn decode_token(token: &str) -> (Vec<u8>, String) {
    let raw = STANDARD.decode(token).expect("token is base64");
    let (digest, plain) = raw.split_at(20);
    (
        digest.to_vec(),
        String::from_utf8(plain.to_vec()).expect("canonical string is UTF-8"),
    )
}

/// Parses `key=value&...` into ordered pairs.
pub fn canonical_fields(plain: &str) -> Vec<(String, String)> {
    plain
        .split('&')
        .map(|pair| {
            let (key, value) = pair.split_once('=').expect("key=value pair");
            (key.to_string(), value.to_string())
        })
        .collect()
}
