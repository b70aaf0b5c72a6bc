//! On-disk snapshots of the last successful API response per resource.
//!
//! Each resource is stored gzip-compressed as `<resource>.json.gz` in the
//! cache directory. Snapshots are what offline mode serves; they are written
//! only after a fetch succeeded and decoded, never by the synthetic source.

use crate::config;
use crate::error::{CrmError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;

/// Gzip-compressed JSON snapshots keyed by resource name.
pub struct SnapshotCache {
    /// Directory where snapshot files are stored.
    pub cache_dir: PathBuf,
}

impl SnapshotCache {
    /// Create a new snapshot cache.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache directory.
    /// Creates the cache directory if it does not exist.
    pub fn new(cache_dir: Option<PathBuf>) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { cache_dir: dir })
    }

    /// Local path of the snapshot for `resource`.
    pub fn path_for(&self, resource: &str) -> Result<PathBuf> {
        if !config::resource_paths().contains_key(resource) {
            return Err(CrmError::NotFound(format!("Unknown resource: {}", resource)));
        }
        Ok(self.cache_dir.join(format!("{}.json.gz", resource)))
    }

    /// Whether a snapshot exists for `resource`.
    pub fn exists(&self, resource: &str) -> bool {
        self.path_for(resource).map(|p| p.exists()).unwrap_or(false)
    }

    /// Write `body` as the snapshot for `resource`.
    ///
    /// Writes to a temp file first and renames on success, so an interrupted
    /// write never leaves a truncated snapshot behind.
    pub fn store(&self, resource: &str, body: &serde_json::Value) -> Result<()> {
        let dest = self.path_for(resource)?;
        let tmp_dest = dest.with_extension("gz.tmp");

        let result = (|| -> Result<()> {
            let file = fs::File::create(&tmp_dest)?;
            let mut encoder = GzEncoder::new(file, Compression::default());
            serde_json::to_writer(&mut encoder, body)?;
            encoder.finish()?.flush()?;
            fs::rename(&tmp_dest, &dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        } else {
            tracing::debug!(resource, path = %dest.display(), "stored snapshot");
        }

        result
    }

    /// Load the snapshot for `resource`, or `None` if none was stored.
    ///
    /// If the file is corrupt it is deleted, so the next successful fetch
    /// writes a fresh copy, and `NotFound` is returned.
    pub fn load(&self, resource: &str) -> Result<Option<serde_json::Value>> {
        let path = self.path_for(resource)?;
        if !path.exists() {
            return Ok(None);
        }

        let parse_result = (|| -> Result<serde_json::Value> {
            let file = fs::File::open(&path)?;
            let mut decoder = GzDecoder::new(BufReader::new(file));
            let mut contents = String::new();
            decoder.read_to_string(&mut contents)?;
            Ok(serde_json::from_str(&contents)?)
        })();

        match parse_result {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt snapshot, removing");
                let _ = fs::remove_file(&path);
                Err(CrmError::NotFound(format!(
                    "Snapshot for '{}' was corrupt and has been removed. \
                     Fetch online to rebuild it. Original error: {}",
                    resource, e
                )))
            }
        }
    }

    /// Remove all snapshots and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }
}
