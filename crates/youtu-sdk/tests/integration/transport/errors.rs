//! Status, timeout and configuration error tests.

use std::time::Duration;

use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};
use youtu_sdk::{Credential, Error, ImageSource, ImageType, YoutuClient};

use crate::common::*;

/// A non-200 status fails even when the body is a valid response.
#[tokio::test]
async fn test_non_200_is_http_status_error() {
    let server = MockServer::start().await;
    mock_any(
        &server,
        ResponseTemplate::new(500).set_body_json(detect_face_json()),
    )
    .await;

    let err = client_for(&server)
        .face()
        .detect(ImageSource::url(SAMPLE_URL))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500 }));
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_no_content_status_is_error() {
    let server = MockServer::start().await;
    mock_any(&server, ResponseTemplate::new(204)).await;

    let err = client_for(&server).person().group_ids().await.unwrap_err();
    assert_eq!(err.status_code(), Some(204));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    mock_any(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({}))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = YoutuClient::builder()
        .credential(test_credential())
        .custom_host(server.uri())
        .timeout(Duration::from_millis(250))
        .build()
        .unwrap();

    let err = client.person().group_ids().await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(matches!(err, Error::Timeout { timeout } if timeout == Duration::from_millis(250)));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let client = YoutuClient::builder()
        .credential(test_credential())
        .custom_host("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.person().group_ids().await.unwrap_err();
    assert!(matches!(err, Error::Network(_) | Error::Timeout { .. }), "{err:?}");
    assert!(!err.is_config());
}

#[test]
fn test_user_id_too_long() {
    let err = Credential::new(1, "A", "B", "u".repeat(111)).unwrap_err();
    assert!(matches!(err, Error::UserIdTooLong { len: 111, max: 110 }));
    assert!(Credential::new(1, "A", "B", "u".repeat(110)).is_ok());
}

#[test]
fn test_invalid_image_input_fails_before_sending() {
    assert!(matches!(
        ImageType::try_from(2u8),
        Err(Error::InvalidInput { .. })
    ));

    let err = ImageSource::from_parts(ImageType::Url, vec![0xFF_u8, 0xFE]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn test_builder_rejects_unsupported_scheme() {
    let err = YoutuClient::builder()
        .credential(test_credential())
        .custom_host("ftp://api.youtu.qq.com")
        .build()
        .unwrap_err();
    assert!(err.is_config());
}
