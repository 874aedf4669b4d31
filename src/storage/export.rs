use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::error::StorageError;
use crate::export::{self, DocumentRenderer};
use crate::model::{RecordStore, Student};

/// The export files the program can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Every collection as plain text.
    PlainText,
    /// Students as CSV.
    Csv,
    /// Students as a rendered document.
    Document,
}

/// Returns the default export path for `kind` inside `dir`.
///
/// Names: `export.txt`, `etudiants.csv`, and `etudiants.{ext}` where `ext`
/// comes from the document renderer.
pub fn default_export_path(
    dir: &Path,
    kind: ExportKind,
    renderer: &dyn DocumentRenderer,
) -> PathBuf {
    let filename = match kind {
        ExportKind::PlainText => "export.txt".to_string(),
        ExportKind::Csv => "etudiants.csv".to_string(),
        ExportKind::Document => format!("etudiants.{}", renderer.extension()),
    };
    dir.join(filename)
}

/// Writes the plain-text dump of every collection to `path`.
pub fn export_plain_text(store: &RecordStore, path: &Path) -> Result<(), StorageError> {
    let mut content = export::to_plain_text(store)?.join("\n");
    content.push('\n');
    fs::write(path, content)?;
    info!(path = %path.display(), "exported plain text");
    Ok(())
}

/// Writes the student CSV to `path`.
pub fn export_csv(students: &[Student], path: &Path) -> Result<(), StorageError> {
    let content = export::to_csv(students)?;
    fs::write(path, content)?;
    info!(path = %path.display(), rows = students.len(), "exported CSV");
    Ok(())
}

/// Renders the student document with `renderer` and writes it to `path`.
pub fn export_document(
    students: &[Student],
    renderer: &dyn DocumentRenderer,
    path: &Path,
) -> Result<(), StorageError> {
    let document = export::to_document(students);
    fs::write(path, renderer.render(&document))?;
    info!(path = %path.display(), paragraphs = document.paragraphs.len(), "exported document");
    Ok(())
}
