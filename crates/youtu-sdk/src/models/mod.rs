//! Data models for the YouTu SDK.
//!
//! This module contains all request and response types used by the SDK,
//! and the table binding each request to its endpoint.

mod common;
mod face;
mod image;
mod ocr;
mod person;

pub use common::*;
pub use face::*;
pub use image::*;
pub use ocr::*;
pub use person::*;

use crate::client::ApiFamily;

/// Binds request types to their endpoint and response type.
macro_rules! operations {
    ($($request:ty => $response:ty, $name:literal, $family:ident $(, validate = $check:path)?;)+) => {
        $(
            impl Operation for $request {
                const NAME: &'static str = $name;
                const FAMILY: ApiFamily = ApiFamily::$family;
                type Response = $response;

                $(
                    fn validate(&self) -> crate::error::Result<()> {
                        $check(self)
                    }
                )?
            }

            impl ApiResponse for $response {
                fn status(&self) -> &ResponseStatus {
                    &self.status
                }
            }
        )+
    };
}

operations! {
    DetectFaceRequest => DetectFaceResponse, "detectface", Api;
    FaceShapeRequest => FaceShapeResponse, "faceshape", Api;
    FaceCompareRequest => FaceCompareResponse, "facecompare", Api;
    FaceVerifyRequest => FaceVerifyResponse, "faceverify", Api;
    FaceIdentifyRequest => FaceIdentifyResponse, "faceidentify", Api;
    GetFaceInfoRequest => GetFaceInfoResponse, "getfaceinfo", Api;
    NewPersonRequest => NewPersonResponse, "newperson", Api;
    DelPersonRequest => DelPersonResponse, "delperson", Api;
    AddFaceRequest => AddFaceResponse, "addface", Api, validate = AddFaceRequest::check_images;
    DelFaceRequest => DelFaceResponse, "delface", Api;
    SetInfoRequest => SetInfoResponse, "setinfo", Api;
    GetInfoRequest => GetInfoResponse, "getinfo", Api;
    GetGroupIdsRequest => GetGroupIdsResponse, "getgroupids", Api;
    GetPersonIdsRequest => GetPersonIdsResponse, "getpersonids", Api;
    GetFaceIdsRequest => GetFaceIdsResponse, "getfaceids", Api;
    FuzzyDetectRequest => FuzzyDetectResponse, "fuzzydetect", ImageApi;
    FoodDetectRequest => FoodDetectResponse, "fooddetect", ImageApi;
    ImageTagRequest => ImageTagResponse, "imagetag", ImageApi;
    ImagePornRequest => ImagePornResponse, "imageporn", ImageApi;
    IdCardOcrRequest => IdCardOcrResponse, "idcardocr", OcrApi;
    NameCardOcrRequest => NameCardOcrResponse, "namecardocr", OcrApi;
}
