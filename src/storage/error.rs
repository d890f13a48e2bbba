use thiserror::Error;

/// Failures the persistence layer can report.
///
/// Callers that want the original soft-failure contract (default value plus a
/// logged warning) go through `LocalStore::get_or` or the accessor managers;
/// the distinct `Unavailable` and `Corrupted` variants exist so diagnostics
/// can tell a disabled storage medium apart from a damaged entry.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("corrupted entry for key '{key}' (removed)")]
    Corrupted { key: String },
}
