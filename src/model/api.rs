use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Multipart form accepted by upload endpoints.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadFormDto {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Document title; defaults to the file name. Ignored for images.
    pub title: Option<String>,
}
