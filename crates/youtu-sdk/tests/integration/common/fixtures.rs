//! Test fixtures for integration tests.

use serde_json::{json, Value};
use youtu_sdk::Credential;

/// Application id used by every test credential.
pub const APP_ID: u32 = 1;

/// Ten bytes standing in for an encoded image.
pub const SAMPLE_IMAGE: [u8; 10] = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

/// Base64 of [`SAMPLE_IMAGE`].
pub const SAMPLE_IMAGE_BASE64: &str = "/9j/4AAQSkZJRg==";

/// Remote image location.
pub const SAMPLE_URL: &str = "http://x/y.jpg";

/// Credential with the minimal identity `(1, "A", "B", "")`.
pub fn test_credential() -> Credential {
    Credential::new(APP_ID, "A", "B", "").expect("valid credential")
}

/// Credential carrying a user id.
pub fn test_credential_with_user(user_id: &str) -> Credential {
    Credential::new(APP_ID, "AKIDtest", "test-secret-key", user_id).expect("valid credential")
}

/// A detected face as the service reports it.
pub fn face_json(face_id: &str) -> Value {
    json!({
        "face_id": face_id,
        "x": 12,
        "y": 34,
        "width": 100.0,
        "height": 120.0,
        "gender": 99,
        "age": 28,
        "expression": 40,
        "glass": false,
        "pitch": 1,
        "yaw": -3,
        "roll": 2,
        "beauty": 80
    })
}

/// Successful detectface body.
pub fn detect_face_json() -> Value {
    json!({
        "session_id": "s1",
        "image_width": 640,
        "image_height": 480,
        "face": [face_json("f-1")],
        "errorcode": 0,
        "errormsg": "OK"
    })
}

/// Body reporting an application-level failure.
pub fn application_error_json(code: i32, message: &str) -> Value {
    json!({
        "session_id": "",
        "errorcode": code,
        "errormsg": message
    })
}
