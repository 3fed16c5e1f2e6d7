//! Sequential generation of the placeholder assets.
//!
//! The payload is decoded once and written to every entry of the target
//! manifest in order. The first failing write aborts the run; files
//! already written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::asset::AssetKind;
use crate::error::AssetError;
use crate::payload::{PayloadDigest, PngPayload};

/// Outcome of a successful generation run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    written: Vec<PathBuf>,
    bytes_per_file: usize,
    digest: PayloadDigest,
}

impl GenerateReport {
    /// Paths written, in write order
    #[inline]
    #[must_use]
    pub fn files_written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Size of each output file in bytes
    #[inline]
    #[must_use]
    pub fn bytes_per_file(&self) -> usize {
        self.bytes_per_file
    }

    /// Content digest shared by every output file
    #[inline]
    #[must_use]
    pub fn digest(&self) -> PayloadDigest {
        self.digest
    }

    /// Check that every asset in the manifest was written
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.written.len() == AssetKind::ALL.len()
    }
}

/// Write all placeholder assets into the current working directory.
///
/// Existing files at the target names are overwritten.
///
/// # Errors
/// Returns an error if the embedded payload fails validation or any
/// write fails.
pub fn generate() -> Result<GenerateReport, AssetError> {
    generate_in(Path::new("."))
}

/// Write all placeholder assets into `dir`.
///
/// # Errors
/// Returns an error if the embedded payload fails validation or any
/// write fails.
pub fn generate_in(dir: &Path) -> Result<GenerateReport, AssetError> {
    let payload = PngPayload::decode()?;
    let digest = payload.digest();
    debug!(
        bytes = payload.len(),
        digest = %digest.short(),
        "decoded placeholder payload"
    );

    let mut written = Vec::with_capacity(AssetKind::ALL.len());
    for kind in AssetKind::ALL {
        let path = dir.join(kind.file_name());
        fs::write(&path, payload.data()).map_err(|source| AssetError::write(&path, source))?;
        debug!(asset = %kind, bytes = payload.len(), "wrote placeholder asset");
        written.push(path);
    }

    Ok(GenerateReport {
        written,
        bytes_per_file: payload.len(),
        digest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_complete_after_run() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate_in(dir.path()).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.files_written().len(), AssetKind::ALL.len());
        assert_eq!(report.bytes_per_file(), 70);
        assert_eq!(report.digest(), PngPayload::decode().unwrap().digest());
    }

    #[test]
    fn written_paths_follow_manifest_order() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate_in(dir.path()).unwrap();

        let names: Vec<_> = report
            .files_written()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        assert_eq!(
            names,
            ["icon.png", "adaptive-icon.png", "favicon.png", "splash-icon.png"]
        );
    }
}
