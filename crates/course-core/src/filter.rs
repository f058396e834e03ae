//! Year filtering and the selection handed to report rendering.

use course_model::{CourseRecord, YearFilter};
use serde::Serialize;
use tracing::debug;

use crate::stats::{Summary, summarize};

/// Records chosen by a year filter, in their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection<'a> {
    /// `None` when the selector was not recognised; nothing is selected then.
    pub filter: Option<YearFilter>,
    pub records: Vec<&'a CourseRecord>,
    /// Mark statistics, absent for an empty selection.
    pub summary: Option<Summary>,
}

impl Selection<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn marks(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.mark()).collect()
    }
}

/// Keep the records matching `filter`, preserving order.
pub fn filter_by_year(records: &[CourseRecord], filter: YearFilter) -> Vec<&CourseRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .collect()
}

/// Filter `records` and compute statistics over the selected marks.
///
/// An unrecognised selector (`None`) matches no record.
pub fn select(records: &[CourseRecord], filter: Option<YearFilter>) -> Selection<'_> {
    let selected = match filter {
        Some(filter) => filter_by_year(records, filter),
        None => Vec::new(),
    };
    let marks: Vec<f64> = selected.iter().map(|record| record.mark()).collect();
    let summary = summarize(&marks);
    debug!(
        filter = ?filter,
        total = records.len(),
        selected = selected.len(),
        "filtered course records"
    );
    Selection {
        filter,
        records: selected,
        summary,
    }
}
