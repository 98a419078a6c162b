//! Error handling module.
//!
//! Two error levels are kept apart on purpose: [`StoreError`] is what a
//! backend can report about raw entries, while [`StorageError`] is the
//! crate-level type that also covers serialization and key-namespace
//! violations. Read paths never surface either one; see
//! [`StorageGateway::get`](crate::gateway::StorageGateway::get).

/// Crate-level error type.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Store backend error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Envelope serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Identifier outside the key namespace.
    #[error("Unknown storage key: {0}")]
    UnknownKey(String),

    /// Write attempted through a key closed to new writes.
    #[error("Key {0} is deprecated and read-only")]
    DeprecatedKey(&'static str),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Store-backend error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// File or device I/O error.
    #[error("Store I/O error: {0}")]
    Io(String),

    /// The backend rejected a write for lack of space.
    #[error("Store quota exceeded")]
    QuotaExceeded,

    /// Backend not usable.
    #[error("Store backend unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::StorageFull | std::io::ErrorKind::QuotaExceeded => {
                Self::QuotaExceeded
            }
            _ => Self::Io(err.to_string()),
        }
    }
}

/// Result type alias using `StorageError`.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Result type alias using `StoreError`.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
