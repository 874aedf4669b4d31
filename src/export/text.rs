use super::error::ExportError;
use crate::model::{Collection, CollectionKind, Record, RecordStore};

/// Returns the section header title for a collection.
pub fn section_title(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Students => "Étudiants",
        CollectionKind::Teachers => "Enseignants",
        CollectionKind::Courses => "Cours",
        CollectionKind::Grades => "Notes",
        CollectionKind::Absences => "Absences",
    }
}

// Appends a `Title:` header followed by one JSON object per record.
fn push_section<T: Record>(
    lines: &mut Vec<String>,
    collection: &Collection<T>,
) -> Result<(), ExportError> {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("{}:", section_title(T::KIND)));
    for record in collection {
        lines.push(serde_json::to_string(record)?);
    }
    Ok(())
}

/// Renders every collection as plain-text lines.
///
/// Sections appear in data-file order, each introduced by its title and
/// separated from the previous one by an empty line. Each record is written
/// as its JSON object, so the dump keeps the stored keys.
pub fn to_plain_text(store: &RecordStore) -> Result<Vec<String>, ExportError> {
    let mut lines = Vec::new();
    push_section(&mut lines, &store.students)?;
    push_section(&mut lines, &store.teachers)?;
    push_section(&mut lines, &store.courses)?;
    push_section(&mut lines, &store.grades)?;
    push_section(&mut lines, &store.absences)?;
    Ok(lines)
}
