//! Group and id listing tests.

use crate::common::*;
use serde_json::json;
use wiremock::MockServer;
use youtu_sdk::ApiFamily;

/// Listing groups sends nothing but the application id.
#[tokio::test]
async fn test_get_group_ids() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::Api,
        "getgroupids",
        json!({"group_ids": ["g1", "g2", "g3"], "errorcode": 0, "errormsg": "OK"}),
    )
    .await;

    let response = client_for(&server).person().group_ids().await.unwrap();

    assert_eq!(response.group_ids, vec!["g1", "g2", "g3"]);
    assert_eq!(sent_body(&server).await, json!({"app_id": "1"}));
}

#[tokio::test]
async fn test_get_person_ids() {
    let server = MockServer::start().await;
    mock_operation(&server, ApiFamily::Api, "getpersonids", json!({"person_ids": ["p1"]})).await;

    let response = client_for(&server).person().person_ids("g1").await.unwrap();

    assert_eq!(response.person_ids, vec!["p1"]);
    assert_eq!(sent_body(&server).await, json!({"app_id": "1", "group_id": "g1"}));
}

#[tokio::test]
async fn test_get_face_ids() {
    let server = MockServer::start().await;
    mock_operation(&server, ApiFamily::Api, "getfaceids", json!({"face_ids": []})).await;

    let response = client_for(&server).person().face_ids("p1").await.unwrap();

    assert!(response.face_ids.is_empty());
    assert_eq!(sent_body(&server).await, json!({"app_id": "1", "person_id": "p1"}));
}
