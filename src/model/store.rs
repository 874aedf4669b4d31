use chrono::NaiveDateTime;

use super::attendance::{Absence, Grade};
use super::collection::Collection;
use super::error::RecordError;
use super::staff::{Course, Teacher};
use super::student::Student;
use super::timestamp;

/// Number of records in each collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub students: usize,
    pub teachers: usize,
    pub courses: usize,
    pub grades: usize,
    pub absences: usize,
}

/// All records of a session.
///
/// There are no links between collections: grades and absences name their
/// student as free text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordStore {
    pub students: Collection<Student>,
    pub teachers: Collection<Teacher>,
    pub courses: Collection<Course>,
    pub grades: Collection<Grade>,
    pub absences: Collection<Absence>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a student stamped with the current local time.
    ///
    /// See [`add_student_at`](Self::add_student_at).
    pub fn add_student(&mut self, name: impl Into<String>) -> Result<&Student, RecordError> {
        self.add_student_at(name, timestamp::now())
    }

    /// Adds a student stamped with `added_at`.
    ///
    /// Returns [`RecordError::DuplicateKey`] if a student with the same name,
    /// compared case-insensitively, already exists.
    pub fn add_student_at(
        &mut self,
        name: impl Into<String>,
        added_at: NaiveDateTime,
    ) -> Result<&Student, RecordError> {
        let name = name.into();
        let lowered = name.to_lowercase();
        if self
            .students
            .iter()
            .any(|s| s.name.to_lowercase() == lowered)
        {
            return Err(RecordError::DuplicateKey(name));
        }
        self.students.add(Student::new(name, added_at));
        let last = self.students.len() - 1;
        Ok(&self.students.as_slice()[last])
    }

    /// Returns the number of records in each collection.
    pub fn stats(&self) -> Stats {
        Stats {
            students: self.students.len(),
            teachers: self.teachers.len(),
            courses: self.courses.len(),
            grades: self.grades.len(),
            absences: self.absences.len(),
        }
    }

    /// Returns `true` if every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.stats() == Stats::default()
    }
}
