/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization or deserialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An export could not be formatted.
    #[error("export error: {0}")]
    Export(#[from] crate::export::ExportError),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// A user with this name is already registered.
    ///
    /// Produced by [`crate::storage::Credentials::register`].
    #[error("user {0:?} is already registered")]
    UserExists(String),
}
