use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::{CollectionKind, Field, Record};

/// A grade given to a student.
///
/// `student` is free text: it is not checked against the student list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(rename = "etudiant")]
    pub student: String,
    #[serde(rename = "note")]
    pub value: String,
}

/// A day a student was absent.
///
/// `date` is expected as `YYYY-MM-DD` but stored as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    #[serde(rename = "etudiant")]
    pub student: String,
    pub date: String,
}

impl Grade {
    pub fn new(student: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            student: student.into(),
            value: value.into(),
        }
    }
}

impl Absence {
    pub fn new(student: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            student: student.into(),
            date: date.into(),
        }
    }
}

impl Record for Grade {
    const KIND: CollectionKind = CollectionKind::Grades;
    const FIELDS: &'static [Field] = &[Field::Student, Field::Value];

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Student => Some(&self.student),
            Field::Value => Some(&self.value),
            _ => None,
        }
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Student => Some(&mut self.student),
            Field::Value => Some(&mut self.value),
            _ => None,
        }
    }
}

impl Record for Absence {
    const KIND: CollectionKind = CollectionKind::Absences;
    const FIELDS: &'static [Field] = &[Field::Student, Field::Date];

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Student => Some(&self.student),
            Field::Date => Some(&self.date),
            _ => None,
        }
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Student => Some(&mut self.student),
            Field::Date => Some(&mut self.date),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.student, self.value)
    }
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.student, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_wire_format() {
        let json = serde_json::to_string(&Grade::new("Alice", "15")).unwrap();
        assert_eq!(json, r#"{"etudiant":"Alice","note":"15"}"#);
    }

    #[test]
    fn absence_wire_format() {
        let absence: Absence =
            serde_json::from_str(r#"{"etudiant":"Bob","date":"2024-03-04"}"#).unwrap();
        assert_eq!(absence, Absence::new("Bob", "2024-03-04"));
    }

    #[test]
    fn grade_fields() {
        let mut grade = Grade::new("Alice", "12");
        assert_eq!(grade.field(Field::Student), Some("Alice"));
        assert_eq!(grade.field(Field::Name), None);
        *grade.field_mut(Field::Value).unwrap() = "14".to_string();
        assert_eq!(grade.value, "14");
    }

    #[test]
    fn absence_fields() {
        let absence = Absence::new("Bob", "2024-03-04");
        assert_eq!(absence.field(Field::Date), Some("2024-03-04"));
        assert!(!Absence::has_field(Field::Value));
    }

    #[test]
    fn display() {
        assert_eq!(Grade::new("Alice", "15").to_string(), "Alice - 15");
        assert_eq!(
            Absence::new("Bob", "2024-03-04").to_string(),
            "Bob - 2024-03-04"
        );
    }
}
