//! Identity card and business card tests.

use crate::common::*;
use serde_json::json;
use wiremock::MockServer;
use youtu_sdk::{ApiFamily, CardType, IdCardOcrRequest, ImageSource, NameCardOcrRequest};

/// The front side sends no `card_type`.
#[tokio::test]
async fn test_id_card_front() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::OcrApi,
        "idcardocr",
        json!({
            "session_id": "o1",
            "name": "Zhang San",
            "name_confidence_all": [98, 97],
            "sex": "M",
            "nation": "Han",
            "birth": "1990/1/1",
            "address": "Shenzhen",
            "id": "440300199001010000",
            "frontimage": "",
            "watermask_status": 1,
            "detail_errorcode": [0, 0],
            "detail_errormsg": ["OK", "OK"],
            "errorcode": 0,
            "errormsg": "OK"
        }),
    )
    .await;

    let response = client_for(&server)
        .ocr()
        .id_card(ImageSource::data(SAMPLE_IMAGE), CardType::Front)
        .await
        .unwrap();

    assert_eq!(response.name, "Zhang San");
    assert_eq!(response.name_confidence_all, vec![98, 97]);
    assert_eq!(response.watermark_status, 1);
    assert_eq!(response.detail_error_codes, vec![0, 0]);
    assert_eq!(response.session_id.as_deref(), Some("o1"));

    let body = sent_body(&server).await;
    assert_eq!(body, json!({"app_id": "1", "image": SAMPLE_IMAGE_BASE64}));
}

#[tokio::test]
async fn test_id_card_back() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::OcrApi,
        "idcardocr",
        json!({"valid_date": "2010.01.01-2030.01.01", "authority": "PSB"}),
    )
    .await;

    let request =
        IdCardOcrRequest::new(ImageSource::url(SAMPLE_URL), CardType::Back).with_session_id("trace-1");
    let response = client_for(&server).ocr().id_card_with_options(&request).await.unwrap();

    assert_eq!(response.authority, "PSB");

    let body = sent_body(&server).await;
    assert_eq!(
        body,
        json!({"app_id": "1", "url": SAMPLE_URL, "card_type": 1, "session_id": "trace-1"})
    );
}

#[tokio::test]
async fn test_name_card() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::OcrApi,
        "namecardocr",
        json!({
            "session_id": "nc",
            "phone": "13800000000",
            "phone_confidence": 0.9,
            "name": "Li Si",
            "name_confidence": 0.8,
            "image": "aGVsbG8="
        }),
    )
    .await;

    let request = NameCardOcrRequest::new(ImageSource::data(SAMPLE_IMAGE)).with_return_image(true);
    let response = client_for(&server).ocr().name_card_with_options(&request).await.unwrap();

    assert_eq!(response.phone, "13800000000");
    assert_eq!(response.name, "Li Si");
    assert_eq!(response.image, "aGVsbG8=");

    let body = sent_body(&server).await;
    assert_eq!(body["retimage"], true);
}

/// `retimage` is left out unless requested.
#[tokio::test]
async fn test_name_card_without_return_image() {
    let server = MockServer::start().await;
    mock_operation(&server, ApiFamily::OcrApi, "namecardocr", json!({})).await;

    client_for(&server)
        .ocr()
        .name_card(ImageSource::url(SAMPLE_URL))
        .await
        .unwrap();

    assert_eq!(
        sent_body(&server).await,
        json!({"app_id": "1", "url": SAMPLE_URL})
    );
}
