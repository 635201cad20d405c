//! Endpoint routing.

/// Path root shared by every endpoint.
const API_ROOT: &str = "youtu";

/// API family an operation belongs to. Selects the URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// Face recognition API, `/youtu/api/`.
    Api,
    /// Image analysis API, `/youtu/imageapi/`.
    ImageApi,
    /// OCR API, `/youtu/ocrapi/`.
    OcrApi,
}

impl ApiFamily {
    /// Returns the path segment of this family.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::ImageApi => "imageapi",
            Self::OcrApi => "ocrapi",
        }
    }
}

impl std::fmt::Display for ApiFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}

/// Builds the full URL of an operation.
///
/// `host` is expected without a trailing slash; the client configuration
/// normalizes it.
#[must_use]
pub fn resolve(host: &str, operation: &str, family: ApiFamily) -> String {
    format!("{host}/{API_ROOT}/{}/{operation}", family.segment())
}
