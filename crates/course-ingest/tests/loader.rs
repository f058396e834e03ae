//! Tests for loading course records from files.

use std::fs;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use course_ingest::{IngestError, LoadStop, StopReason, load_records, read_records};

fn write_data(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write data file");
    path
}

#[test]
fn loads_every_well_formed_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_data(
        dir.path(),
        "courses.dat",
        "50 10001 Mechanics\n70 20002 Optics\n90 10003 Waves\n",
    );

    let loaded = load_records(&path).expect("load records");

    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.ignored_lines, 0);
    assert_eq!(loaded.stop, None);
    let titles: Vec<&str> = loaded.records.iter().map(|r| r.full_title()).collect();
    assert_eq!(
        titles,
        vec!["PHYS 10001 Mechanics", "PHYS 20002 Optics", "PHYS 10003 Waves"]
    );
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.dat");

    let error = load_records(&path).expect_err("missing file must fail");

    let IngestError::Open { path: failed, .. } = error;
    assert_eq!(failed, path);
}

#[test]
fn stops_at_first_malformed_line() {
    let input = "61.2 30101 Nuclear Physics\n\
                 not a record\n\
                 72 30202 Particle Physics\n\
                 \n";

    let loaded = read_records(Cursor::new(input));

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.records[0].name(), "Nuclear Physics");
    assert_eq!(
        loaded.stop,
        Some(LoadStop {
            line: 2,
            reason: StopReason::Malformed
        })
    );
    assert_eq!(loaded.ignored_lines, 3);
}

#[test]
fn skips_blank_lines_between_records() {
    let input = "\n55 10101 Dynamics\n   \n\n66 20101 Thermodynamics\n\n";

    let loaded = read_records(Cursor::new(input));

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.ignored_lines, 0);
    assert_eq!(loaded.records[1].code(), 20101);
}

#[test]
fn handles_crlf_line_endings() {
    let input = "50 10001 Mechanics\r\n70 20002 Optics\r\n";

    let loaded = read_records(Cursor::new(input));

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.records[0].name(), "Mechanics");
    assert_eq!(loaded.records[1].full_title(), "PHYS 20002 Optics");
}

#[test]
fn empty_source_loads_nothing() {
    let loaded = read_records(Cursor::new(""));
    assert!(loaded.is_empty());
    assert_eq!(loaded.stop, None);
}

#[test]
fn latin1_names_load_with_replacement_characters() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("latin1.dat");
    let mut bytes = b"50 10001 Mechanics\n".to_vec();
    bytes.extend_from_slice(b"70 20002 Schr\xf6dinger Equation\n");
    bytes.extend_from_slice(b"90 10003 Waves\n");
    fs::write(&path, bytes).expect("write data file");

    let loaded = load_records(&path).expect("load records");

    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.stop, None);
    assert_eq!(loaded.records[1].code(), 20002);
    assert_eq!(loaded.records[1].name(), "Schr\u{fffd}dinger Equation");
    assert_eq!(loaded.records[2].full_title(), "PHYS 10003 Waves");
}

/// Yields its data, then fails every later read.
struct FailingSource {
    data: Cursor<Vec<u8>>,
}

impl Read for FailingSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::other("device went away")),
            read => Ok(read),
        }
    }
}

#[test]
fn read_failure_keeps_records_loaded_so_far() {
    let source = FailingSource {
        data: Cursor::new(b"50 10001 Mechanics\n70 20002 Optics\n".to_vec()),
    };

    let loaded = read_records(BufReader::new(source));

    assert_eq!(loaded.len(), 2);
    assert_eq!(
        loaded.stop,
        Some(LoadStop {
            line: 3,
            reason: StopReason::ReadFailed
        })
    );
}
