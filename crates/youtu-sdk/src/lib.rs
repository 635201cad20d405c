//! # YouTu SDK
//!
//! Rust SDK for the Tencent YouTu open platform: face detection and
//! recognition, person libraries, image analysis and OCR over signed HTTP
//! calls.
//!
//! ## Features
//!
//! - **Type-safe API client** - One request and one response type per operation
//! - **Async-first design** - Built on tokio and reqwest
//! - **Request signing** - HMAC-SHA1 tokens generated per call, pluggable signer
//! - **Connection pooling** - Clones of a client share one HTTP pool
//! - **Explicit configuration** - Host, timeout and debug flag live on the client
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use youtu_sdk::{Credential, ImageSource, YoutuClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), youtu_sdk::Error> {
//!     let credential = Credential::new(1000061, "AKIDxxxx", "your-secret-key", "")?;
//!     let client = YoutuClient::builder().credential(credential).build()?;
//!
//!     let image = std::fs::read("face.jpg").expect("readable image");
//!     let detected = client.face().detect(ImageSource::data(image)).await?;
//!
//!     for face in detected.face {
//!         println!("Face {} aged {}", face.face_id, face.age);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Hosts
//!
//! ```rust,no_run
//! # use youtu_sdk::{Credential, Host, YoutuClient};
//! # let credential = Credential::new(1, "id", "key", "")?;
//! let client = YoutuClient::builder()
//!     .credential(credential)
//!     .host(Host::TencentYun)
//!     .build()?;
//! # Ok::<(), youtu_sdk::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Transport failures, non-200 statuses and undecodable bodies are returned
//! as [`Error`]. A decoded body that reports a non-zero `errorcode` is still a
//! successful response; use [`ApiResponse::into_result`] to turn it into
//! [`Error::Application`]:
//!
//! ```rust,no_run
//! # use youtu_sdk::{ApiResponse, ImageSource, YoutuClient};
//! # async fn example(client: YoutuClient) {
//! match client.face().info("face-1").await.and_then(ApiResponse::into_result) {
//!     Ok(info) => println!("Age: {}", info.face_info.age),
//!     Err(youtu_sdk::Error::Application { code, message }) => {
//!         println!("Rejected ({code}): {message}");
//!     }
//!     Err(e) if e.is_timeout() => println!("Timed out"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export main types
pub use auth::{Credential, Signer, YoutuSigner};
pub use client::{
    ApiFamily, ClientConfig, Host, YoutuClient, YoutuClientBuilder, DEFAULT_HOST, TENCENT_YUN_HOST,
};
pub use error::{Error, Result};

// Re-export model types for convenience
pub use models::{
    ApiResponse, Operation, ResponseStatus, ImageType, ImageSource, ImagePair, ImageBatch,
    DetectMode, DetectFaceRequest, DetectFaceResponse, Face, FaceShapeRequest, FaceShapeResponse,
    FaceShape, Point, FaceCompareRequest, FaceCompareResponse, FaceVerifyRequest, FaceVerifyResponse,
    FaceIdentifyRequest, FaceIdentifyResponse, Candidate, GetFaceInfoRequest, GetFaceInfoResponse,
    NewPersonRequest, NewPersonResponse, DelPersonRequest, DelPersonResponse, AddFaceRequest,
    AddFaceResponse, DelFaceRequest, DelFaceResponse, SetInfoRequest, SetInfoResponse,
    GetInfoRequest, GetInfoResponse, GetGroupIdsRequest, GetGroupIdsResponse, GetPersonIdsRequest,
    GetPersonIdsResponse, GetFaceIdsRequest, GetFaceIdsResponse,
    FuzzyDetectRequest, FuzzyDetectResponse, FoodDetectRequest, FoodDetectResponse, ImageTag,
    ImageTagRequest, ImageTagResponse, ImagePornRequest, ImagePornResponse,
    CardType, IdCardOcrRequest, IdCardOcrResponse, NameCardOcrRequest, NameCardOcrResponse,
};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent string for API requests
pub const USER_AGENT: &str = concat!("youtu-sdk-rust/", env!("CARGO_PKG_VERSION"));
