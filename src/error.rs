//! Error types for placeholder asset generation.
//!
//! Covers the two ways a run can fail: the embedded payload does not
//! survive validation, or a filesystem write is refused. There is no
//! retry and no rollback; the first failure aborts the run.

use std::io;
use std::path::PathBuf;

/// Errors produced while decoding the embedded payload or writing assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Embedded constant failed to decode as base64
    #[error("base64 decode failed: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Decoded bytes do not start with the PNG file signature
    #[error("decoded payload does not start with the PNG signature")]
    BadSignature,

    /// PNG header could not be parsed
    #[error("png header rejected: {0}")]
    Header(#[from] png::DecodingError),

    /// PNG header parsed but the image is not 1x1
    #[error("unexpected image dimensions: {width}x{height}")]
    Dimensions { width: u32, height: u32 },

    /// A filesystem write failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path of the file that could not be written
        path: PathBuf,
        /// Underlying OS error
        source: io::Error,
    },
}

impl AssetError {
    /// Check if the error came from the filesystem
    #[inline]
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Write { .. })
    }

    /// Wrap an I/O error with the path it occurred on
    #[inline]
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_path_and_os_error() {
        let err = AssetError::write(
            "icon.png",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("icon.png"));
        assert!(msg.contains("denied"));
        assert!(err.is_io());
    }

    #[test]
    fn validation_errors_are_not_io() {
        assert!(!AssetError::BadSignature.is_io());
        assert!(!AssetError::Dimensions {
            width: 2,
            height: 2
        }
        .is_io());
    }

    #[test]
    fn dimensions_error_display() {
        let err = AssetError::Dimensions {
            width: 64,
            height: 32,
        };
        assert!(err.to_string().contains("64x32"));
    }
}
