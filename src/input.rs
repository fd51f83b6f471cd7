//! Image capture helpers
//!
//! Turns user-selected files or browser-style data URIs into the base64
//! attachments forwarded to the model.

use crate::models::ImageAttachment;
use crate::Result;
use base64::Engine as _;
use std::path::Path;

const FALLBACK_MIME: &str = "image/jpeg";

/// Sniff a raster format from magic numbers.
pub fn detect_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        _ => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?}), falling back to {}",
                &bytes[..bytes.len().min(4)],
                FALLBACK_MIME
            );
            FALLBACK_MIME
        }
    }
}

impl ImageAttachment {
    /// Read and encode an image file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Encode raw image bytes, sniffing the MIME type.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            mime_type: detect_image_mime(bytes).to_string(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Accept a `data:<mime>;base64,<payload>` URI as produced by browser
    /// file readers. A bare base64 string (no comma) is taken as-is.
    pub fn from_data_uri(uri: &str) -> Self {
        match uri.split_once(',') {
            Some((header, payload)) => {
                let mime_type = header
                    .strip_prefix("data:")
                    .and_then(|rest| rest.split(';').next())
                    .filter(|mime| !mime.is_empty())
                    .unwrap_or(FALLBACK_MIME);
                Self {
                    mime_type: mime_type.to_string(),
                    data: payload.to_string(),
                }
            }
            None => Self {
                mime_type: FALLBACK_MIME.to_string(),
                data: uri.to_string(),
            },
        }
    }
}
