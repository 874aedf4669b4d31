use crate::model::{
    Absence, Collection, Field, Grade, Record, RecordError, Student, parse_date, parse_timestamp,
};

/// Returns records whose `name` equals `name`, ignoring case, in storage order.
///
/// Only meaningful for students, teachers and courses; other record types
/// have no name and never match.
pub fn search_by_name<'a, T: Record>(collection: &'a Collection<T>, name: &str) -> Vec<&'a T> {
    search_field(collection, Field::Name, name)
}

/// Returns students added on `date` (`YYYY-MM-DD`), in storage order.
///
/// Only the date part of each stored timestamp is compared. Students whose
/// timestamp does not parse never match.
pub fn search_by_added_date<'a>(
    students: &'a Collection<Student>,
    date: &str,
) -> Result<Vec<&'a Student>, RecordError> {
    let wanted = parse_date(date)?;
    Ok(students.filter(|s| parse_timestamp(&s.date_added).is_some_and(|ts| ts.date() == wanted)))
}

/// Returns grades given to `student_name`, ignoring case.
pub fn search_grades_by_student<'a>(
    grades: &'a Collection<Grade>,
    student_name: &str,
) -> Vec<&'a Grade> {
    search_field(grades, Field::Student, student_name)
}

/// Returns absences recorded for `student_name`, ignoring case.
pub fn search_absences_by_student<'a>(
    absences: &'a Collection<Absence>,
    student_name: &str,
) -> Vec<&'a Absence> {
    search_field(absences, Field::Student, student_name)
}

// Case-insensitive exact match on one field.
fn search_field<'a, T: Record>(collection: &'a Collection<T>, field: Field, value: &str) -> Vec<&'a T> {
    let wanted = value.to_lowercase();
    collection.filter(|record| {
        record
            .field(field)
            .is_some_and(|v| v.to_lowercase() == wanted)
    })
}
