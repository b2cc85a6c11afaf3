// Image loading for inline upload
// Author: kelexine (https://github.com/kelexine)

use super::models::ImageFormat;
use crate::error::{Result, TranslateError};
use crate::models::gemini::InlineData;
use base64::Engine;
use std::io;
use std::path::Path;
use tracing::debug;

/// Read an image from disk and encode it as Gemini inline data.
///
/// A missing file always yields [`TranslateError::ImageNotFound`], whether it
/// is caught by the existence check or surfaces from the read itself.
pub async fn load_image(path: &str) -> Result<InlineData> {
    let not_found = || TranslateError::ImageNotFound(path.to_string());

    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(not_found());
    }

    let bytes = tokio::fs::read(Path::new(path)).await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => not_found(),
        _ => TranslateError::from(e),
    })?;

    let format = ImageFormat::detect(&bytes).ok_or_else(|| {
        TranslateError::Transport(format!("cannot identify image file '{}'", path))
    })?;

    debug!("Loaded {} byte image as {}", bytes.len(), format.mime_type());

    Ok(InlineData {
        mime_type: format.mime_type().to_string(),
        data: base64::engine::general_purpose::STANDARD.encode(&bytes),
    })
}
