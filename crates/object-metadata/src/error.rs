use std::path::PathBuf;

/// Failures while loading a metadata snapshot
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The snapshot file could not be read
    #[error("reading metadata from {}: {source}", path.display())]
    Io {
        /// Location of the snapshot
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The snapshot is not valid metadata JSON
    #[error("parsing metadata: {0}")]
    Json(#[from] serde_json::Error),
}
