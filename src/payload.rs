//! Embedded PNG payload.
//!
//! One base64 constant holds the complete placeholder image, a 1x1 blue
//! PNG. The decoded bytes are written to disk verbatim; nothing here
//! re-encodes or transforms the image.

use std::fmt::{self, Display, Formatter};
use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::error::AssetError;

/// Base64 encoding of the placeholder image: a 1x1 blue PNG.
pub const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChAI9jU77zgAAAABJRU5ErkJggg==";

/// The 8-byte signature every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Decoded placeholder image, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngPayload(Vec<u8>);

impl PngPayload {
    /// Decode the embedded constant and validate the result.
    ///
    /// Validation checks the PNG signature and that the header encodes a
    /// 1x1 image. It only reads the bytes; the buffer handed back is the
    /// exact decoding of [`PLACEHOLDER_PNG_BASE64`].
    ///
    /// # Errors
    /// Returns an error if the constant is not valid base64, the decoded
    /// bytes are not a PNG, or the image is not 1x1.
    pub fn decode() -> Result<Self, AssetError> {
        let bytes = STANDARD.decode(PLACEHOLDER_PNG_BASE64)?;
        if !bytes.starts_with(&PNG_SIGNATURE) {
            return Err(AssetError::BadSignature);
        }

        let decoder = png::Decoder::new(Cursor::new(bytes.as_slice()));
        let reader = decoder.read_info()?;
        let info = reader.info();
        if info.width != 1 || info.height != 1 {
            return Err(AssetError::Dimensions {
                width: info.width,
                height: info.height,
            });
        }

        Ok(Self(bytes))
    }

    /// Get reference to the payload bytes
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.0
    }

    /// Get payload length in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// SHA-256 digest of the payload bytes
    #[inline]
    #[must_use]
    pub fn digest(&self) -> PayloadDigest {
        PayloadDigest::compute(&self.0)
    }
}

/// A 32-byte content digest (SHA-256) of asset bytes.
///
/// Every output file of a successful run shares one digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayloadDigest([u8; 32]);

impl PayloadDigest {
    /// Compute the digest of arbitrary data
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for PayloadDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_produces_validated_payload() {
        let payload = PngPayload::decode().unwrap();
        assert!(!payload.is_empty());
        assert!(payload.data().starts_with(&PNG_SIGNATURE));
    }

    #[test]
    fn payload_length_matches_constant() {
        let payload = PngPayload::decode().unwrap();
        assert_eq!(payload.len(), 70);
    }

    #[test]
    fn payload_digest_matches_data() {
        let payload = PngPayload::decode().unwrap();
        assert_eq!(payload.digest(), PayloadDigest::compute(payload.data()));
    }

    #[test]
    fn digest_is_deterministic() {
        let a = PayloadDigest::compute(b"test");
        let b = PayloadDigest::compute(b"test");
        assert_eq!(a, b);
        assert_ne!(a, PayloadDigest::compute(b"other"));
    }

    #[test]
    fn digest_short_is_prefix_of_display() {
        let digest = PayloadDigest::compute(b"test");
        assert_eq!(digest.short().len(), 16);
        assert_eq!(digest.to_string().len(), 64);
        assert!(digest.to_string().starts_with(&digest.short()));
    }
}
