//! Read-only searches over single collections.
//!
//! Searches compare case-insensitively and return borrowed records in
//! storage order. Sorting lives on [`Collection`](crate::model::Collection)
//! because it mutates.

mod search;

pub use search::{
    search_absences_by_student, search_by_added_date, search_by_name, search_grades_by_student,
};
