//! Image loader contract.
//!
//! The decoder itself is an external collaborator; the engine only
//! defines what it must return and the validation that rejects a file
//! before any state mutation happens.

use thiserror::Error;

use overtype_core::ImageIdentity;

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Mime types the loader accepts.
pub const ACCEPTED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Result of a successful image decode.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f32,
    pub preview_url: String,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32, preview_url: String) -> Self {
        Self {
            width,
            height,
            aspect_ratio: width as f32 / height.max(1) as f32,
            preview_url,
        }
    }

    /// The identity a session built on this image is keyed by.
    pub fn identity(&self) -> ImageIdentity {
        ImageIdentity {
            url: self.preview_url.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Validation errors: reported to the user, the operation aborts, and
/// no engine state mutates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("unsupported image type '{mime}'")]
    UnsupportedType { mime: String },

    #[error("file is {size} bytes, over the {limit}-byte limit")]
    TooLarge { size: u64, limit: u64 },
}

/// Reject unsupported or oversized files before decoding starts.
pub fn validate_upload(mime: &str, size: u64) -> Result<(), UploadError> {
    if !ACCEPTED_TYPES.contains(&mime) {
        return Err(UploadError::UnsupportedType { mime: mime.into() });
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_raster_types() {
        for mime in ["image/jpeg", "image/png", "image/webp"] {
            assert!(validate_upload(mime, 1024).is_ok());
        }
    }

    #[test]
    fn test_rejects_wrong_type_and_oversize() {
        assert_eq!(
            validate_upload("image/svg+xml", 10),
            Err(UploadError::UnsupportedType { mime: "image/svg+xml".into() })
        );
        assert_eq!(
            validate_upload("image/png", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::TooLarge { size: MAX_UPLOAD_BYTES + 1, limit: MAX_UPLOAD_BYTES })
        );
    }

    #[test]
    fn test_image_info_identity() {
        let info = ImageInfo::new(800, 400, "blob:p".into());
        assert_eq!(info.aspect_ratio, 2.0);
        assert_eq!(
            info.identity(),
            ImageIdentity { url: "blob:p".into(), width: 800, height: 400 }
        );
    }
}
