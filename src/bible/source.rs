//! Backing Resource Provider
//!
//! Abstracts where translation bytes come from. The store only needs two
//! things from a source: an existence check (for catalog filtering) and the
//! raw bytes plus their encoding. Decompression itself happens in the store,
//! driven by the reported encoding.
//!
//! The trait seam is what makes the store testable: unit tests inject an
//! in-memory source with a read counter to observe that a cached translation
//! is never re-read.

use std::path::PathBuf;

use crate::error::AppError;

/// How the raw bytes handed back by a source are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// Plain JSON bytes, parse directly.
    Plain,
    /// Gzip-compressed JSON bytes, decompress first.
    Gzip,
}

/// Provider of raw translation bytes for a version identifier.
pub trait TextSource: Send + Sync {
    /// Whether a backing resource exists for `version_id`.
    fn exists(&self, version_id: &str) -> bool;

    /// Reads the backing resource. Fails with `NotFound` when no resource
    /// exists for `version_id`.
    fn read(&self, version_id: &str) -> Result<(Vec<u8>, SourceEncoding), AppError>;
}

/// Filesystem-backed source. Resolves `<data_dir>/<id>.json.gz` first, then
/// the uncompressed `<data_dir>/<id>.json`.
pub struct FsTextSource {
    data_dir: PathBuf,
}

impl FsTextSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn gz_path(&self, version_id: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json.gz", version_id))
    }

    fn plain_path(&self, version_id: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", version_id))
    }
}

impl TextSource for FsTextSource {
    fn exists(&self, version_id: &str) -> bool {
        self.gz_path(version_id).is_file() || self.plain_path(version_id).is_file()
    }

    fn read(&self, version_id: &str) -> Result<(Vec<u8>, SourceEncoding), AppError> {
        let gz = self.gz_path(version_id);
        if gz.is_file() {
            let bytes = std::fs::read(&gz).map_err(|e| {
                AppError::CorruptData(format!("failed to read {}: {}", gz.display(), e))
            })?;
            return Ok((bytes, SourceEncoding::Gzip));
        }

        let plain = self.plain_path(version_id);
        if plain.is_file() {
            let bytes = std::fs::read(&plain).map_err(|e| {
                AppError::CorruptData(format!("failed to read {}: {}", plain.display(), e))
            })?;
            return Ok((bytes, SourceEncoding::Plain));
        }

        Err(AppError::NotFound(format!(
            "no data file for version '{}'",
            version_id
        )))
    }
}
