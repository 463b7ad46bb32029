//! Loading images for disease detection.

use std::path::Path;

use smartcrop_core::advisory::ImageUpload;
use smartcrop_core::error::{AdvisoryError, Result};

/// Reads an image file and guesses its MIME type from the extension.
///
/// Empty files are rejected. Non-image types are sent anyway; the service decides.
pub async fn load_image(path: &Path) -> Result<ImageUpload> {
    let bytes = tokio::fs::read(path).await?;
    if bytes.is_empty() {
        return Err(AdvisoryError::rejected(
            format!("image '{}'", path.display()),
            "file is empty",
        ));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        tracing::warn!(file = %file_name, mime = %mime, "Uploading a file that is not an image");
    }

    Ok(ImageUpload::new(file_name, mime.essence_str(), bytes))
}
