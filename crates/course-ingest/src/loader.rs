//! Line-oriented course record loader.
//!
//! Each record occupies one line:
//!
//! ```text
//! <mark> <code> <name...>
//! ```
//!
//! The mark is a real number, the code an integer, and the name is the rest
//! of the line with a single separating space removed. Loading is permissive:
//! it stops at the first line that does not start with a `(mark, code)` pair
//! and reports how many lines were left unread instead of failing.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use course_model::CourseRecord;
use tracing::{debug, info_span, warn};

use crate::error::{IngestError, Result};

/// Why loading ended before the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A non-blank line did not start with a mark and a code.
    Malformed,
    /// The source returned an I/O error.
    ReadFailed,
}

/// Where and why loading stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStop {
    /// 1-based line number of the first line not loaded.
    pub line: usize,
    pub reason: StopReason,
}

/// Records parsed from a source plus what was left behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRecords {
    pub records: Vec<CourseRecord>,
    /// Set when loading stopped before the end of input.
    pub stop: Option<LoadStop>,
    /// Lines from the stop line to end of input that were not loaded.
    ///
    /// Only lines that could still be read are counted.
    pub ignored_lines: usize,
}

impl LoadedRecords {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<CourseRecord> {
        self.records
    }
}

/// Open `path` and load every record it contains.
///
/// # Errors
///
/// Returns [`IngestError::Open`] if the file cannot be opened. Nothing after
/// a successful open is fatal.
pub fn load_records(path: &Path) -> Result<LoadedRecords> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = read_records(BufReader::new(file));
    debug!(records = loaded.len(), "course data file closed");
    Ok(loaded)
}

/// Parse records from any buffered source.
///
/// Lines are decoded lossily, so bytes that are not UTF-8 become U+FFFD in
/// the course name instead of ending the load. An I/O error ends loading
/// like a malformed line does.
pub fn read_records<R: BufRead>(mut reader: R) -> LoadedRecords {
    let mut loaded = LoadedRecords::default();
    let mut buf = Vec::new();
    let mut line_number = 0usize;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(error) => {
                loaded.stop = Some(LoadStop {
                    line: line_number + 1,
                    reason: StopReason::ReadFailed,
                });
                warn!(line = line_number + 1, %error, "stopped reading after an I/O error");
                break;
            }
        }
        let line = decode_line(&buf);
        // The record reader skips whitespace between records.
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(record) => loaded.records.push(record),
            None => {
                loaded.stop = Some(LoadStop {
                    line: line_number,
                    reason: StopReason::Malformed,
                });
                loaded.ignored_lines = 1 + count_remaining_lines(&mut reader);
                warn!(
                    line = line_number,
                    ignored_lines = loaded.ignored_lines,
                    "stopped reading at a line without a mark and code"
                );
                break;
            }
        }
    }
    debug!(records = loaded.len(), lines = line_number, "parsed course records");
    loaded
}

/// Parse one `<mark> <code> <name>` line.
///
/// Returns `None` when the line does not begin with a finite mark followed
/// by an integer code.
pub fn parse_line(line: &str) -> Option<CourseRecord> {
    let (mark_token, rest) = split_token(line.trim_start())?;
    let mark = mark_token
        .parse::<f64>()
        .ok()
        .filter(|mark| mark.is_finite())?;
    let (code_token, rest) = split_token(rest.trim_start())?;
    let code = code_token.parse::<i32>().ok()?;
    Some(CourseRecord::new(mark, code, strip_separator(rest)))
}

fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

fn count_remaining_lines<R: BufRead>(reader: &mut R) -> usize {
    let mut buf = Vec::new();
    let mut count = 0;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => return count,
            Ok(_) => count += 1,
        }
    }
}

fn split_token(input: &str) -> Option<(&str, &str)> {
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some(input.split_at(end))
}

fn strip_separator(rest: &str) -> &str {
    let mut chars = rest.chars();
    match chars.next() {
        Some(ch) if ch.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}
