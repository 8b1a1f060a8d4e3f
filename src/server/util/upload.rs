use axum::extract::Multipart;

use crate::server::error::AppError;

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// A single file read from a multipart request, plus the optional `title` field.
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub title: Option<String>,
}

/// Reads the `file` part and optional `title` part of a multipart form.
///
/// # Returns
/// - `Ok(Upload)` - The uploaded file
/// - `Err(AppError::BadRequest)` - No `file` part, empty file, or file too large
/// - `Err(AppError::MultipartErr)` - Malformed multipart body
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut title = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            Some("title") => {
                let text = field.text().await?;
                let text = text.trim();
                if !text.is_empty() {
                    title = Some(text.to_string());
                }
            }
            _ => {}
        }
    }

    let Some((file_name, content_type, bytes)) = file else {
        return Err(AppError::BadRequest("Missing 'file' field".to_string()));
    };

    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest(format!(
            "Uploaded file exceeds {} bytes",
            MAX_UPLOAD_BYTES
        )));
    }

    Ok(Upload {
        file_name,
        content_type,
        bytes,
        title,
    })
}

/// Image extensions accepted for avatars and thumbnails, with the stored content type.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

/// Extensions accepted for lesson documents, with the stored content type.
///
/// Stored files are served from the API origin with a type derived from the extension,
/// so anything a browser would render as a page (HTML, SVG, XML) is left out.
const DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("zip", "application/zip"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

fn allowed_type(file_name: &str, allowed: &[(&str, &'static str)]) -> Option<&'static str> {
    let (_, extension) = file_name.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();

    allowed
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
}

/// Accepts PNG, JPEG, GIF and WebP images by file extension.
///
/// The declared content type is replaced with the one matching the extension.
pub fn require_image(upload: &mut Upload) -> Result<(), AppError> {
    let content_type = allowed_type(&upload.file_name, IMAGE_TYPES).ok_or_else(|| {
        AppError::BadRequest("Expected a PNG, JPEG, GIF or WebP image".to_string())
    })?;
    upload.content_type = content_type.to_string();

    Ok(())
}

/// Accepts lesson documents with an allowed file extension.
///
/// The declared content type is replaced with the one matching the extension.
pub fn require_document(upload: &mut Upload) -> Result<(), AppError> {
    let content_type = allowed_type(&upload.file_name, DOCUMENT_TYPES).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Unsupported document type for '{}'",
            upload.file_name
        ))
    })?;
    upload.content_type = content_type.to_string();

    Ok(())
}
