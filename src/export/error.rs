/// Errors that can occur while formatting an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The CSV writer failed to encode a row.
    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer failed to flush its buffer.
    #[error("CSV flush error: {0}")]
    Flush(#[from] std::io::Error),

    /// A record could not be rendered as JSON.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
