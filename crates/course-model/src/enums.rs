//! Closed sets of user choices for ordering and selecting course records.
//!
//! Both choices arrive as free text from the command line or a prompt.
//! Parsing rejects anything outside the set with a [`ModelError`]; what
//! happens next (warn and fall back, or abort) is up to the caller.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{self, ModelError};
use crate::record::CourseRecord;

/// Field used to order the record sequence ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lexicographic by course name.
    Title,
    /// Numeric by course code.
    Code,
    /// Numeric by mark.
    Mark,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Title, SortKey::Code, SortKey::Mark];

    /// Returns the keyword accepted on input.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Code => "code",
            SortKey::Mark => "mark",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    /// Keywords are matched exactly after trimming surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "title" => Ok(SortKey::Title),
            "code" => Ok(SortKey::Code),
            "mark" => Ok(SortKey::Mark),
            _ => Err(ModelError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Which academic years to keep when listing courses.
///
/// Serializes as its selector character (`"A"`, `"1"`..`"4"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearFilter {
    /// Every record, selector `A`.
    All,
    /// Only records whose code maps to this year, selectors `1` to `4`.
    Year(u8),
}

impl YearFilter {
    /// Parse a single selector character.
    pub fn from_char(selector: char) -> error::Result<Self> {
        match selector {
            'A' => Ok(YearFilter::All),
            '1'..='4' => {
                // Range pattern guarantees an ASCII digit.
                let year = selector as u8 - b'0';
                Ok(YearFilter::Year(year))
            }
            other => Err(ModelError::UnknownFilter(other)),
        }
    }

    pub fn matches(&self, record: &CourseRecord) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => record.year() == i32::from(*year),
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str("A"),
            YearFilter::Year(year) => write!(f, "{year}"),
        }
    }
}

impl Serialize for YearFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for YearFilter {
    type Err = ModelError;

    /// Uses the first non-whitespace character; trailing input is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start().chars().next() {
            Some(selector) => YearFilter::from_char(selector),
            None => Err(ModelError::MissingFilter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("title".parse::<SortKey>(), Ok(SortKey::Title));
        assert_eq!("code".parse::<SortKey>(), Ok(SortKey::Code));
        assert_eq!(" mark ".parse::<SortKey>(), Ok(SortKey::Mark));
        assert_eq!(
            "Title".parse::<SortKey>(),
            Err(ModelError::UnknownSortKey("Title".to_string()))
        );
        assert!("name".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_display_round_trips() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>(), Ok(key));
        }
    }

    #[test]
    fn test_year_filter_from_char() {
        assert_eq!(YearFilter::from_char('A'), Ok(YearFilter::All));
        assert_eq!(YearFilter::from_char('1'), Ok(YearFilter::Year(1)));
        assert_eq!(YearFilter::from_char('4'), Ok(YearFilter::Year(4)));
        assert_eq!(
            YearFilter::from_char('5'),
            Err(ModelError::UnknownFilter('5'))
        );
        assert_eq!(
            YearFilter::from_char('a'),
            Err(ModelError::UnknownFilter('a'))
        );
        assert!(YearFilter::from_char('0').is_err());
    }

    #[test]
    fn test_year_filter_from_str_takes_first_char() {
        assert_eq!("  2".parse::<YearFilter>(), Ok(YearFilter::Year(2)));
        assert_eq!("A ll".parse::<YearFilter>(), Ok(YearFilter::All));
        assert_eq!("12".parse::<YearFilter>(), Ok(YearFilter::Year(1)));
        assert_eq!("".parse::<YearFilter>(), Err(ModelError::MissingFilter));
        assert_eq!("  ".parse::<YearFilter>(), Err(ModelError::MissingFilter));
    }

    #[test]
    fn test_year_filter_serializes_as_selector() {
        assert_eq!(serde_json::to_value(YearFilter::All).expect("json"), "A");
        assert_eq!(serde_json::to_value(YearFilter::Year(3)).expect("json"), "3");
        assert_eq!(serde_json::to_value(SortKey::Code).expect("json"), "code");
    }

    #[test]
    fn test_year_filter_matches() {
        let first = CourseRecord::new(50.0, 10001, "Mechanics");
        let second = CourseRecord::new(70.0, 20002, "Optics");
        assert!(YearFilter::All.matches(&first));
        assert!(YearFilter::All.matches(&second));
        assert!(YearFilter::Year(1).matches(&first));
        assert!(!YearFilter::Year(1).matches(&second));
        assert!(YearFilter::Year(2).matches(&second));
    }
}
