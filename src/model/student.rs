use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::record::{CollectionKind, Field, Record};
use super::timestamp::format_timestamp;

/// An enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "nom")]
    pub name: String,
    /// `YYYY-MM-DD HH:MM:SS`; empty for records saved without one.
    #[serde(rename = "date_ajout", default)]
    pub date_added: String,
}

impl Student {
    /// Creates a student stamped with the given time.
    pub fn new(name: impl Into<String>, added_at: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            date_added: format_timestamp(added_at),
        }
    }
}

impl Record for Student {
    const KIND: CollectionKind = CollectionKind::Students;
    const FIELDS: &'static [Field] = &[Field::Name, Field::DateAdded];

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::DateAdded => Some(&self.date_added),
            _ => None,
        }
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::DateAdded => Some(&mut self.date_added),
            _ => None,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.date_added)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn make_student() -> Student {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Student::new("Alice", ts)
    }

    #[test]
    fn new_stamps_formatted_timestamp() {
        let student = make_student();
        assert_eq!(student.name, "Alice");
        assert_eq!(student.date_added, "2024-01-01 10:00:00");
    }

    #[test]
    fn serializes_with_wire_keys() {
        let json = serde_json::to_string(&make_student()).unwrap();
        assert_eq!(json, r#"{"nom":"Alice","date_ajout":"2024-01-01 10:00:00"}"#);
    }

    #[test]
    fn missing_date_deserializes_empty() {
        let student: Student = serde_json::from_str(r#"{"nom":"Bob"}"#).unwrap();
        assert_eq!(student.name, "Bob");
        assert_eq!(student.date_added, "");
    }

    #[test]
    fn fields_by_name() {
        let mut student = make_student();
        assert_eq!(student.field(Field::Name), Some("Alice"));
        assert_eq!(student.field(Field::DateAdded), Some("2024-01-01 10:00:00"));
        assert_eq!(student.field(Field::Value), None);
        assert!(student.field_mut(Field::Student).is_none());
        *student.field_mut(Field::Name).unwrap() = "Alicia".to_string();
        assert_eq!(student.name, "Alicia");
    }

    #[test]
    fn display_joins_name_and_date() {
        assert_eq!(make_student().to_string(), "Alice - 2024-01-01 10:00:00");
    }
}
