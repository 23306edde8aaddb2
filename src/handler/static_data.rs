//! Static data document
//!
//! The JSON file behind `GET /data` is read and parsed once at startup.
//! It is serialized back once as well, so every request is answered with the
//! very same bytes.

use hyper::body::Bytes;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Failure to load the static data file. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read static data file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("static data file {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Static document, validated and rendered once
#[derive(Debug, Clone)]
pub struct StaticData {
    body: Bytes,
}

impl StaticData {
    /// Read and parse the file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Value = serde_json::from_slice(&raw).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_value(&document))
    }

    pub fn from_value(document: &Value) -> Self {
        // Serializing a `Value` cannot fail: its map keys are always strings
        let body = Bytes::from(serde_json::to_vec(document).unwrap_or_default());
        Self { body }
    }

    /// Response body; cloning `Bytes` only bumps a reference count
    pub fn body(&self) -> Bytes {
        self.body.clone()
    }
}
