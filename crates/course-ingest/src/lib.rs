//! Loading course records from whitespace-delimited text files.

pub mod error;
pub mod loader;

pub use error::{IngestError, Result};
pub use loader::{LoadStop, LoadedRecords, StopReason, load_records, parse_line, read_records};
