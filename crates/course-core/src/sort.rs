use std::cmp::Ordering;

use course_model::{CourseRecord, SortKey};
use tracing::debug;

/// Reorder `records` in place, ascending by `key`.
///
/// Names compare byte-wise; marks use [`f64::total_cmp`].
pub fn sort_records(records: &mut [CourseRecord], key: SortKey) {
    records.sort_by(|left, right| compare_by(key, left, right));
    debug!(key = %key, records = records.len(), "sorted course records");
}

fn compare_by(key: SortKey, left: &CourseRecord, right: &CourseRecord) -> Ordering {
    match key {
        SortKey::Title => left.name().cmp(right.name()),
        SortKey::Code => left.code().cmp(&right.code()),
        SortKey::Mark => left.mark().total_cmp(&right.mark()),
    }
}
