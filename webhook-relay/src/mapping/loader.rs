//! Loading the mapping file from disk.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::WebhookMap;

/// Failure to produce a mapping from the configured file.
#[derive(Debug, Error)]
pub enum MapError {
    /// The file could not be read (missing, permission denied, ...)
    #[error("failed to read webhook map file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not an object of `{webhooks_url}` objects
    #[error("failed to parse webhook map file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the mapping file.
///
/// Always hits the filesystem, so edits to the file are visible on the next call.
pub async fn load_webhook_map(path: &Path) -> Result<WebhookMap, MapError> {
    let raw = tokio::fs::read(path).await.map_err(|source| MapError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // A top-level `null` is an empty mapping
    let map = serde_json::from_slice::<Option<WebhookMap>>(&raw)
        .map_err(|source| MapError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .unwrap_or_default();

    debug!(
        path = %path.display(),
        entries = map.len(),
        "webhook_map_loaded"
    );

    Ok(map)
}
