//! Candidate values produced by the field extractors.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A date found in document text, normalized to `YYYY-MM-DD`.
///
/// Day and month are kept exactly as read: a numeric token such as
/// `31/13/2099` produces a candidate that is not a real calendar date.
/// Use [`DateCandidate::to_naive_date`] to check.
///
/// Ordering is chronological, which matches lexicographic order of the
/// normalized string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateCandidate {
    year: u32,
    month: u32,
    day: u32,
}

impl DateCandidate {
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The candidate as a calendar date, if it is one.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let year = i32::try_from(self.year).ok()?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl From<NaiveDate> for DateCandidate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year().max(0) as u32, date.month(), date.day())
    }
}

impl fmt::Display for DateCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Error returned when a string is not in `YYYY-MM-DD` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateCandidateError(String);

impl fmt::Display for ParseDateCandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a YYYY-MM-DD date: {}", self.0)
    }
}

impl std::error::Error for ParseDateCandidateError {}

impl FromStr for DateCandidate {
    type Err = ParseDateCandidateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDateCandidateError(s.to_string());
        let mut parts = s.splitn(3, '-');
        let mut next = || -> Result<u32, ParseDateCandidateError> {
            parts.next().ok_or_else(err)?.parse().map_err(|_| err())
        };
        let year = next()?;
        let month = next()?;
        let day = next()?;
        Ok(Self::new(year, month, day))
    }
}

impl Serialize for DateCandidate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateCandidate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Everything one engine run found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseCandidates {
    /// Dates, deduplicated and sorted ascending.
    pub dates: Vec<DateCandidate>,

    /// Monetary amounts in discovery order, without duplicates.
    pub amounts: Vec<u64>,

    /// Tenant name, if any label pattern matched.
    pub tenant: Option<String>,
}

impl LeaseCandidates {
    /// Earliest date candidate.
    pub fn earliest_date(&self) -> Option<DateCandidate> {
        self.dates.first().copied()
    }

    /// Latest date candidate.
    pub fn latest_date(&self) -> Option<DateCandidate> {
        self.dates.last().copied()
    }

    /// First amount candidate in discovery order.
    pub fn first_amount(&self) -> Option<u64> {
        self.amounts.first().copied()
    }

    /// True if no field produced a candidate.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.amounts.is_empty() && self.tenant.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(DateCandidate::new(2026, 3, 5).to_string(), "2026-03-05");
    }

    #[test]
    fn test_order_is_chronological() {
        let mut dates = vec![
            DateCandidate::new(2025, 1, 10),
            DateCandidate::new(2024, 6, 1),
            DateCandidate::new(2024, 12, 31),
        ];
        dates.sort();
        let strings: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
        assert_eq!(strings, vec!["2024-06-01", "2024-12-31", "2025-01-10"]);
    }

    #[test]
    fn test_invalid_calendar_date_is_kept_but_not_a_naive_date() {
        let date = DateCandidate::new(2099, 13, 31);
        assert_eq!(date.to_string(), "2099-13-31");
        assert!(date.to_naive_date().is_none());
        assert!(DateCandidate::new(2024, 2, 29).to_naive_date().is_some());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let date = DateCandidate::new(2025, 4, 14);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-04-14\"");
        let back: DateCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<DateCandidate>("\"14/04/2025\"").is_err());
    }

    #[test]
    fn test_candidate_accessors() {
        let candidates = LeaseCandidates {
            dates: vec![DateCandidate::new(2024, 6, 1), DateCandidate::new(2025, 6, 1)],
            amounts: vec![4500, 9000],
            tenant: None,
        };
        assert_eq!(candidates.earliest_date(), Some(DateCandidate::new(2024, 6, 1)));
        assert_eq!(candidates.latest_date(), Some(DateCandidate::new(2025, 6, 1)));
        assert_eq!(candidates.first_amount(), Some(4500));
        assert!(!candidates.is_empty());
        assert!(LeaseCandidates::default().is_empty());
    }
}
