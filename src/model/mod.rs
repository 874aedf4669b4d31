mod attendance;
mod collection;
mod error;
mod record;
mod staff;
mod store;
mod student;
mod timestamp;

pub use attendance::{Absence, Grade};
pub use collection::{Collection, SortKey, SortOrder};
pub use error::RecordError;
pub use record::{CollectionKind, Field, Record};
pub use staff::{Course, Teacher};
pub use store::{RecordStore, Stats};
pub use student::Student;
pub use timestamp::{DATE_FORMAT, TIMESTAMP_FORMAT, format_timestamp, parse_date, parse_timestamp};
