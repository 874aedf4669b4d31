use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::{CollectionKind, Field, Record};

/// A teacher. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "nom")]
    pub name: String,
}

/// A course. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "nom")]
    pub name: String,
}

impl Teacher {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Record for Teacher {
    const KIND: CollectionKind = CollectionKind::Teachers;
    const FIELDS: &'static [Field] = &[Field::Name];

    fn field(&self, field: Field) -> Option<&str> {
        (field == Field::Name).then_some(self.name.as_str())
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        (field == Field::Name).then_some(&mut self.name)
    }
}

impl Record for Course {
    const KIND: CollectionKind = CollectionKind::Courses;
    const FIELDS: &'static [Field] = &[Field::Name];

    fn field(&self, field: Field) -> Option<&str> {
        (field == Field::Name).then_some(self.name.as_str())
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        (field == Field::Name).then_some(&mut self.name)
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
