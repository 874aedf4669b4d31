use csv::WriterBuilder;

use super::error::ExportError;
use crate::model::Student;

/// Header row of the student CSV export.
pub const CSV_HEADER: [&str; 2] = ["Nom", "Date d'ajout"];

/// Renders students as CSV: a header row, then one row per student.
///
/// Rows end with `\r\n`.
pub fn to_csv(students: &[Student]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for student in students {
        writer.write_record([student.name.as_str(), student.date_added.as_str()])?;
    }

    writer.into_inner().map_err(|e| ExportError::Flush(e.into_error()))
}
