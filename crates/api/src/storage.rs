//! Local-disk image storage.
//!
//! Treated as an external collaborator: it accepts a binary payload and
//! returns a retrievable URL. A write failure is an unrecoverable error for
//! the request; handlers surface it instead of degrading silently. Files
//! belonging to deleted attachment rows are not reclaimed here.

use std::path::PathBuf;

use image::ImageFormat;
use uuid::Uuid;

/// Image formats accepted for upload, checked by header magic bytes.
const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::WebP,
    ImageFormat::Gif,
];

/// Error type for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The payload is not one of the accepted image formats.
    #[error("Unsupported image format for '{0}'. Supported: png, jpeg, webp, gif")]
    UnsupportedFormat(String),

    /// Filesystem failure writing the payload.
    #[error("Storage write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes uploaded images under a root directory and hands back the URL
/// they will be served from.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
    public_url: String,
}

impl Storage {
    /// Create a storage backend rooted at `root`, serving files under
    /// `public_url` (no trailing slash).
    pub fn new(root: PathBuf, public_url: impl Into<String>) -> Self {
        let mut public_url = public_url.into();
        while public_url.ends_with('/') {
            public_url.pop();
        }
        Self { root, public_url }
    }

    /// Validate and persist one uploaded image, returning its public URL.
    ///
    /// The stored name is a fresh UUID plus the extension implied by the
    /// sniffed format, so client-supplied filenames never reach the
    /// filesystem.
    pub async fn store_image(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let format = image::guess_format(bytes)
            .ok()
            .filter(|f| ACCEPTED_FORMATS.contains(f))
            .ok_or_else(|| StorageError::UnsupportedFormat(original_name.to_string()))?;

        let extension = format.extensions_str().first().copied().unwrap_or("bin");
        let stored_name = format!("{}.{extension}", Uuid::new_v4());

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&stored_name), bytes).await?;

        Ok(format!("{}/{stored_name}", self.public_url))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    /// Smallest possible payload that sniffs as PNG: the 8-byte magic.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn stores_png_and_returns_public_url() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = Storage::new(dir.path().to_path_buf(), "/media/");

        let url = storage
            .store_image("photo.png", PNG_MAGIC)
            .await
            .expect("store should succeed");

        assert!(url.starts_with("/media/"), "url was {url}");
        assert!(url.ends_with(".png"), "url was {url}");

        let stored_name = url.strip_prefix("/media/").unwrap();
        let on_disk = std::fs::read(dir.path().join(stored_name)).expect("file should exist");
        assert_eq!(on_disk, PNG_MAGIC);
    }

    #[tokio::test]
    async fn rejects_non_image_payload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = Storage::new(dir.path().to_path_buf(), "/media");

        let err = storage
            .store_image("notes.txt", b"just some text")
            .await
            .unwrap_err();
        assert_matches!(err, StorageError::UnsupportedFormat(name) => {
            assert_eq!(name, "notes.txt");
        });
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let storage = Storage::new(PathBuf::from("/tmp/x"), "/media///");
        assert_eq!(storage.public_url, "/media");
    }
}
