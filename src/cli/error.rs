use crate::storage::StorageError;

/// Errors that can occur in the interactive layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred on the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A storage error occurred outside the menu loop.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Standard input was closed while a prompt was waiting.
    #[error("input closed")]
    InputClosed,
}
