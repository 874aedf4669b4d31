use thiserror::Error;

use super::record::{CollectionKind, Field};

/// Errors produced by record store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A student with the same name (compared case-insensitively) already exists.
    #[error("a student named {0:?} already exists")]
    DuplicateKey(String),

    /// No record in the collection has `field` equal to `value`.
    #[error("no record in {kind} with {field} = {value:?}")]
    NotFound {
        /// The collection that was searched.
        kind: CollectionKind,
        /// The field that was compared.
        field: Field,
        /// The value that was looked for.
        value: String,
    },

    /// A search date did not match `YYYY-MM-DD`.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// The record type of the collection has no such field.
    #[error("{kind} records have no {field} field")]
    UnknownField {
        /// The collection the field was requested on.
        kind: CollectionKind,
        /// The missing field.
        field: Field,
    },
}
