use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("Storage I/O error for key '{key}': {source}")]
    Io {
        /// Storage key being read or written
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Key would escape the storage root or is otherwise unusable.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}
