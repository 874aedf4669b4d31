use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::error::RecordError;
use super::record::{Field, Record};
use super::timestamp::parse_timestamp;

/// Sort criterion for [`Collection::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// The `name` field, compared case-insensitively.
    Name,
    /// The parsed `date_added` timestamp.
    DateAdded,
}

/// Direction for [`Collection::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// An insertion-ordered sequence of records of one type.
///
/// Matching is always first-match on an exact (case-sensitive) string
/// comparison of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. No uniqueness is checked.
    pub fn add(&mut self, record: T) {
        self.items.push(record);
    }

    /// Returns the first record whose `field` equals `value` exactly.
    pub fn find_by_exact_field(&self, field: Field, value: &str) -> Result<&T, RecordError> {
        let index = self.position(field, value)?;
        Ok(&self.items[index])
    }

    /// Sets `field_to_set` to `new_value` on the first record whose
    /// `field_to_match` equals `value`.
    ///
    /// The collection is left untouched on error.
    pub fn update_field(
        &mut self,
        field_to_match: Field,
        value: &str,
        field_to_set: Field,
        new_value: impl Into<String>,
    ) -> Result<(), RecordError> {
        if !T::has_field(field_to_set) {
            return Err(RecordError::UnknownField {
                kind: T::KIND,
                field: field_to_set,
            });
        }
        let index = self.position(field_to_match, value)?;
        if let Some(slot) = self.items[index].field_mut(field_to_set) {
            *slot = new_value.into();
        }
        Ok(())
    }

    /// Removes and returns the first record whose `field` equals `value`.
    pub fn remove(&mut self, field: Field, value: &str) -> Result<T, RecordError> {
        let index = self.position(field, value)?;
        Ok(self.items.remove(index))
    }

    /// Returns every record matching `predicate`, in storage order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|record| predicate(record)).collect()
    }

    /// Sorts the collection in place. The sort is stable.
    ///
    /// Records whose timestamp does not parse are kept after all others when
    /// sorting by [`SortKey::DateAdded`], whatever the order.
    pub fn sort(&mut self, key: SortKey, order: SortOrder) {
        match key {
            SortKey::Name => self.items.sort_by(|a, b| {
                let a = a.field(Field::Name).unwrap_or_default().to_lowercase();
                let b = b.field(Field::Name).unwrap_or_default().to_lowercase();
                order.apply(a.cmp(&b))
            }),
            SortKey::DateAdded => self.items.sort_by(|a, b| {
                let a = a.field(Field::DateAdded).and_then(parse_timestamp);
                let b = b.field(Field::DateAdded).and_then(parse_timestamp);
                match (a, b) {
                    (Some(a), Some(b)) => order.apply(a.cmp(&b)),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, field: Field, value: &str) -> Result<usize, RecordError> {
        if !T::has_field(field) {
            return Err(RecordError::UnknownField { kind: T::KIND, field });
        }
        self.items
            .iter()
            .position(|record| record.field(field) == Some(value))
            .ok_or_else(|| RecordError::NotFound {
                kind: T::KIND,
                field,
                value: value.to_string(),
            })
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
