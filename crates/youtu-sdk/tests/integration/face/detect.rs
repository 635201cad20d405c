//! Face detection and landmark tests.

use crate::common::*;
use serde_json::json;
use wiremock::MockServer;
use youtu_sdk::{ApiFamily, ApiResponse, DetectFaceRequest, DetectMode, ImageSource, ImageType};

/// Inline image bytes travel base64-encoded under `image`.
#[tokio::test]
async fn test_detect_face_with_image_bytes() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::Api,
        "detectface",
        json!({"session_id": "s1", "face": []}),
    )
    .await;

    let image = ImageSource::from_parts(ImageType::try_from(0u8).unwrap(), SAMPLE_IMAGE).unwrap();
    let response = client_for(&server).face().detect(image).await.unwrap();

    assert_eq!(response.session_id, "s1");
    assert!(response.face.is_empty());
    assert_eq!(response.error_code(), 0);

    let body = sent_body(&server).await;
    assert_eq!(body, json!({"app_id": "1", "image": SAMPLE_IMAGE_BASE64}));
}

/// URL images travel under `url` and never carry `image`.
#[tokio::test]
async fn test_detect_face_with_url() {
    let server = MockServer::start().await;
    mock_operation(&server, ApiFamily::Api, "detectface", detect_face_json()).await;

    let image = ImageSource::from_parts(ImageType::Url, SAMPLE_URL.as_bytes()).unwrap();
    let response = client_for(&server).face().detect(image).await.unwrap();

    assert_eq!(response.image_width, 640);
    assert_eq!(response.face.len(), 1);
    assert_eq!(response.face[0].face_id, "f-1");
    assert_eq!(response.face[0].age, 28);

    let body = sent_body(&server).await;
    assert_eq!(body["url"], SAMPLE_URL);
    assert!(body.get("image").is_none());
}

/// Big face mode is sent as `mode: 1`.
#[tokio::test]
async fn test_detect_face_big_face_mode() {
    let server = MockServer::start().await;
    mock_operation(&server, ApiFamily::Api, "detectface", detect_face_json()).await;

    let request = DetectFaceRequest::new(ImageSource::url(SAMPLE_URL))
        .with_mode(DetectMode::from_big_face(true));
    client_for(&server).face().detect_with_options(&request).await.unwrap();

    let body = sent_body(&server).await;
    assert_eq!(body["mode"], 1);
}

/// Landmark lists decode into points.
#[tokio::test]
async fn test_face_shape() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::Api,
        "faceshape",
        json!({
            "session_id": "s2",
            "image_width": 200,
            "image_height": 100,
            "face_shape": [{
                "face_profile": [{"x": 1, "y": 2}, {"x": 3, "y": 4}],
                "left_eye": [{"x": 5, "y": 6}],
                "mouth": []
            }],
            "errorcode": 0,
            "errormsg": "OK"
        }),
    )
    .await;

    let response = client_for(&server)
        .face()
        .shape(ImageSource::data(SAMPLE_IMAGE))
        .await
        .unwrap();

    assert_eq!(response.face_shape.len(), 1);
    let shape = &response.face_shape[0];
    assert_eq!(shape.face_profile.len(), 2);
    assert_eq!(shape.face_profile[1].x, 3);
    assert_eq!(shape.left_eye[0].y, 6);
    assert!(shape.nose.is_empty());
}
