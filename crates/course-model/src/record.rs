use serde::Serialize;

/// Prefix prepended to every course code in a full title.
pub const TITLE_PREFIX: &str = "PHYS";

/// Divisor that maps a course code onto its academic year.
pub const YEAR_DIVISOR: i32 = 10_000;

/// A single course entry loaded from a data file.
///
/// Fields are read-only after construction; `full_title` is derived from
/// `code` and `name` in [`CourseRecord::new`] and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    mark: f64,
    code: i32,
    name: String,
    full_title: String,
}

impl CourseRecord {
    pub fn new(mark: f64, code: i32, name: impl Into<String>) -> Self {
        let name = name.into();
        let full_title = format!("{TITLE_PREFIX} {code} {name}");
        Self {
            mark,
            code,
            name,
            full_title,
        }
    }

    pub fn mark(&self) -> f64 {
        self.mark
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_title(&self) -> &str {
        &self.full_title
    }

    /// Academic year encoded in the leading digit(s) of the code.
    ///
    /// Integer division truncates toward zero, so `19999` is year 1.
    pub fn year(&self) -> i32 {
        self.code / YEAR_DIVISOR
    }
}
