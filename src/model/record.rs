use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// The five record collections held by a [`RecordStore`](super::RecordStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Students,
    Teachers,
    Courses,
    Grades,
    Absences,
}

static ALL_KINDS: &[CollectionKind] = &[
    CollectionKind::Students,
    CollectionKind::Teachers,
    CollectionKind::Courses,
    CollectionKind::Grades,
    CollectionKind::Absences,
];

impl CollectionKind {
    /// Returns the key this collection is stored under in the data file.
    pub fn key(self) -> &'static str {
        match self {
            Self::Students => "etudiants",
            Self::Teachers => "enseignants",
            Self::Courses => "cours",
            Self::Grades => "notes",
            Self::Absences => "absences",
        }
    }

    /// Returns all kinds in data-file order.
    pub fn all() -> &'static [CollectionKind] {
        ALL_KINDS
    }
}

#[mutants::skip]
impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Students => "students",
            Self::Teachers => "teachers",
            Self::Courses => "courses",
            Self::Grades => "grades",
            Self::Absences => "absences",
        };
        f.write_str(name)
    }
}

/// A string field that can be matched or updated on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    DateAdded,
    Student,
    Value,
    Date,
}

impl Field {
    /// Returns the JSON key of this field in the data file.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "nom",
            Self::DateAdded => "date_ajout",
            Self::Student => "etudiant",
            Self::Value => "note",
            Self::Date => "date",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Common behavior for every record type stored in a
/// [`Collection`](super::Collection).
///
/// Fields are exposed by name so that matching and updating can be written
/// once for all five collections.
pub trait Record: Clone + fmt::Debug + fmt::Display + PartialEq + Serialize + DeserializeOwned {
    /// The collection this record type lives in.
    const KIND: CollectionKind;

    /// The fields this record type carries.
    const FIELDS: &'static [Field];

    /// Returns the value of `field`, or `None` if this type has no such field.
    fn field(&self, field: Field) -> Option<&str>;

    /// Returns a mutable handle to `field`, or `None` if this type has no such field.
    fn field_mut(&mut self, field: Field) -> Option<&mut String>;

    /// Returns `true` if this record type carries `field`.
    fn has_field(field: Field) -> bool {
        Self::FIELDS.contains(&field)
    }
}
