//! Sorting, year filtering and mark statistics over course records.

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{Selection, filter_by_year, select};
pub use sort::sort_records;
pub use stats::{Summary, mean, sample_std_dev, summarize};
