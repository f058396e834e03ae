//! Data model for course mark reports.

pub mod enums;
pub mod error;
pub mod record;

pub use enums::{SortKey, YearFilter};
pub use error::{ModelError, Result};
pub use record::{CourseRecord, TITLE_PREFIX, YEAR_DIVISOR};
