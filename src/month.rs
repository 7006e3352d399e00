//! A calendar month in "YYYY-MM" format.
//!
//! Transactions are keyed by month rather than by day, and the backend wire
//! format uses the "YYYY-MM" string form, whose lexicographic order matches
//! chronological order.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Error;

/// A calendar month, e.g. "2024-03".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    /// One-based month number, always in `1..=12`.
    month: u8,
}

impl Month {
    /// Create a month from a year and a one-based month number.
    ///
    /// Returns `None` if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The next calendar month, wrapping the year boundary.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonth(s.to_owned());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;

        Month::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Every month from `first` to `last` inclusive, so a chart over the range has
/// no gaps.
///
/// If `last` is before `first`, only `first` is returned.
pub fn month_range(first: Month, last: Month) -> Vec<Month> {
    let mut months = vec![first];
    let mut current = first;

    while current < last {
        current = current.next();
        months.push(current);
    }

    months
}

#[cfg(test)]
mod tests {
    use super::{Month, month_range};
    use crate::Error;

    fn month(year: i32, month: u8) -> Month {
        Month::new(year, month).unwrap()
    }

    #[test]
    fn parses_and_displays_year_month_strings() {
        let parsed: Month = "2024-03".parse().unwrap();

        assert_eq!(parsed, month(2024, 3));
        assert_eq!(parsed.to_string(), "2024-03");
    }

    #[test]
    fn rejects_malformed_strings() {
        for text in ["2024", "2024-13", "2024-00", "03-2024", "foo-bar", ""] {
            let result: Result<Month, _> = text.parse();
            assert_eq!(result, Err(Error::InvalidMonth(text.to_owned())), "{text}");
        }
    }

    #[test]
    fn ordering_matches_chronology() {
        assert!(month(2023, 12) < month(2024, 1));
        assert!(month(2024, 1) < month(2024, 2));
    }

    #[test]
    fn next_wraps_year_boundary() {
        assert_eq!(month(2024, 1).next(), month(2024, 2));
        assert_eq!(month(2023, 12).next(), month(2024, 1));
    }

    #[test]
    fn range_includes_every_month_between_endpoints() {
        let months = month_range(month(2023, 11), month(2024, 2));

        assert_eq!(
            months,
            vec![
                month(2023, 11),
                month(2023, 12),
                month(2024, 1),
                month(2024, 2)
            ]
        );
    }

    #[test]
    fn range_with_equal_endpoints_is_a_single_month() {
        assert_eq!(
            month_range(month(2024, 5), month(2024, 5)),
            vec![month(2024, 5)]
        );
    }

    #[test]
    fn range_with_reversed_endpoints_returns_first() {
        assert_eq!(
            month_range(month(2024, 5), month(2024, 1)),
            vec![month(2024, 5)]
        );
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&month(2024, 3)).unwrap();
        assert_eq!(json, "\"2024-03\"");

        let roundtrip: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, month(2024, 3));
    }
}
