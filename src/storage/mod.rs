//! Record persistence (JSON), credentials, and export files.
//!
//! All records live in one `data.json` object holding the five collections.
//! It is rewritten whole on every save through a temporary file and a rename.

mod credentials;
mod error;
mod export;
mod manager;

pub use credentials::{Credentials, load_credentials, save_credentials};
pub use error::StorageError;
pub use export::{
    ExportKind, default_export_path, export_csv, export_document, export_plain_text,
};
pub use manager::{CREDENTIALS_FILE, DATA_FILE, DataManager, load, save};
