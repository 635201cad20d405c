//! Person and face management tests.

use crate::common::*;
use serde_json::json;
use wiremock::MockServer;
use youtu_sdk::{
    AddFaceRequest, ApiFamily, ImageBatch, ImageSource, ImageType, NewPersonRequest,
    SetInfoRequest,
};

#[tokio::test]
async fn test_new_person() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::Api,
        "newperson",
        json!({
            "session_id": "n1",
            "suc_group": 2,
            "suc_face": 1,
            "person_id": "p1",
            "face_id": "f1",
            "group_ids": ["g1", "g2"],
            "errorcode": 0,
            "errormsg": "OK"
        }),
    )
    .await;

    let request = NewPersonRequest::new(
        "p1",
        vec!["g1".to_string(), "g2".to_string()],
        ImageSource::data(SAMPLE_IMAGE),
    )
    .with_name("Alice")
    .with_tag("staff");
    let response = client_for(&server).person().create(&request).await.unwrap();

    assert_eq!(response.suc_group, 2);
    assert_eq!(response.face_id, "f1");

    let body = sent_body(&server).await;
    assert_eq!(
        body,
        json!({
            "app_id": "1",
            "person_id": "p1",
            "group_ids": ["g1", "g2"],
            "person_name": "Alice",
            "tag": "staff",
            "image": SAMPLE_IMAGE_BASE64
        })
    );
}

/// Optional name and tag are left out when unset.
#[tokio::test]
async fn test_new_person_without_optional_fields() {
    let server = MockServer::start().await;
    mock_operation(&server, ApiFamily::Api, "newperson", json!({"person_id": "p2"})).await;

    let request = NewPersonRequest::new("p2", vec!["g1".to_string()], ImageSource::url(SAMPLE_URL));
    client_for(&server).person().create(&request).await.unwrap();

    let body = sent_body(&server).await;
    assert!(body.get("person_name").is_none());
    assert!(body.get("tag").is_none());
    assert_eq!(body["url"], SAMPLE_URL);
}

#[tokio::test]
async fn test_del_person() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::Api,
        "delperson",
        json!({"session_id": "d1", "deleted": 1, "person_id": "p1"}),
    )
    .await;

    let response = client_for(&server).person().delete("p1").await.unwrap();

    assert_eq!(response.deleted, 1);
    assert_eq!(sent_body(&server).await, json!({"app_id": "1", "person_id": "p1"}));
}

#[tokio::test]
async fn test_add_face_with_images() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::Api,
        "addface",
        json!({"session_id": "a1", "added": 2, "face_ids": ["f1", "f2"], "ret_codes": [0, 0]}),
    )
    .await;

    let images =
        ImageBatch::from_parts(ImageType::Data, vec![SAMPLE_IMAGE.to_vec(), SAMPLE_IMAGE.to_vec()])
            .unwrap();
    let request = AddFaceRequest::new("p1", images).with_tag("second-batch");
    let response = client_for(&server).person().add_faces(&request).await.unwrap();

    assert_eq!(response.added, 2);
    assert_eq!(response.ret_codes, vec![0, 0]);

    let body = sent_body(&server).await;
    assert_eq!(body["images"], json!([SAMPLE_IMAGE_BASE64, SAMPLE_IMAGE_BASE64]));
    assert_eq!(body["tag"], "second-batch");
    assert!(body.get("urls").is_none());
}

#[tokio::test]
async fn test_add_face_with_urls() {
    let server = MockServer::start().await;
    mock_operation(&server, ApiFamily::Api, "addface", json!({"added": 1})).await;

    let images = ImageBatch::from_parts(ImageType::Url, vec![SAMPLE_URL.as_bytes().to_vec()]).unwrap();
    client_for(&server)
        .person()
        .add_faces(&AddFaceRequest::new("p1", images))
        .await
        .unwrap();

    let body = sent_body(&server).await;
    assert_eq!(body, json!({"app_id": "1", "person_id": "p1", "urls": [SAMPLE_URL]}));
}

/// An empty batch fails locally instead of posting `"images": []`.
#[tokio::test]
async fn test_add_face_rejects_empty_batch() {
    let server = MockServer::start().await;
    mock_operation(&server, ApiFamily::Api, "addface", json!({"added": 0})).await;

    let request = AddFaceRequest::new("p1", ImageBatch::Data(Vec::new()));
    let err = client_for(&server).person().add_faces(&request).await.unwrap_err();
    assert!(matches!(err, youtu_sdk::Error::InvalidInput { .. }));

    let err = client_for(&server).send(&request).await.unwrap_err();
    assert!(matches!(err, youtu_sdk::Error::InvalidInput { .. }));

    assert!(ImageBatch::from_parts(ImageType::Url, Vec::new()).is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_del_face() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::Api,
        "delface",
        json!({"session_id": "x", "deleted": 1, "face_ids": ["f1"]}),
    )
    .await;

    let response = client_for(&server)
        .person()
        .delete_faces("p1", vec!["f1".to_string()])
        .await
        .unwrap();

    assert_eq!(response.face_ids, vec!["f1".to_string()]);
    assert_eq!(
        sent_body(&server).await,
        json!({"app_id": "1", "person_id": "p1", "face_ids": ["f1"]})
    );
}

#[tokio::test]
async fn test_set_info() {
    let server = MockServer::start().await;
    mock_operation(&server, ApiFamily::Api, "setinfo", json!({"person_id": "p1"})).await;

    let request = SetInfoRequest::new("p1").with_name("Bob");
    let response = client_for(&server).person().set_info(&request).await.unwrap();

    assert_eq!(response.person_id, "p1");
    assert_eq!(
        sent_body(&server).await,
        json!({"app_id": "1", "person_id": "p1", "person_name": "Bob"})
    );
}

#[tokio::test]
async fn test_get_info() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        ApiFamily::Api,
        "getinfo",
        json!({
            "person_name": "Alice",
            "person_id": "p1",
            "group_ids": ["g1"],
            "face_ids": ["f1", "f2"],
            "session_id": "gi"
        }),
    )
    .await;

    let response = client_for(&server).person().info("p1").await.unwrap();

    assert_eq!(response.person_name, "Alice");
    assert_eq!(response.face_ids.len(), 2);
}
