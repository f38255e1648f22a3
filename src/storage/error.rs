use thiserror::Error;

/// Failures raised by a [`StorageBackend`](super::StorageBackend).
///
/// These never reach store callers: the [`Storage`](super::Storage) wrapper
/// logs them and degrades to "absent" or "no-op".
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("storage file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Codec(String),
}

impl From<bitcode::Error> for StorageError {
    fn from(err: bitcode::Error) -> Self {
        StorageError::Codec(err.to_string())
    }
}
