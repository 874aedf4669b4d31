//! Export formatting: plain text, CSV and documents.
//!
//! Pure functions over a [`RecordStore`](crate::model::RecordStore)
//! snapshot. No I/O; the storage layer writes the results to disk.

mod document;
mod error;
mod table;
mod text;

pub use document::{
    DOCUMENT_HEADING, Document, DocumentRenderer, EMPTY_PLACEHOLDER, MarkdownRenderer, to_document,
};
pub use error::ExportError;
pub use table::{CSV_HEADER, to_csv};
pub use text::{section_title, to_plain_text};
