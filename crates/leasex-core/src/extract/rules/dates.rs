//! Date extraction for Hebrew lease documents.

use std::collections::BTreeSet;

use regex::Captures;
use tracing::{debug, trace};

use super::patterns::{hebrew_month_number, DATE_HEBREW_LONG, DATE_NUMERIC};
use super::{digit_bounded, FieldExtractor};
use crate::models::candidates::DateCandidate;
use crate::models::config::{DateRange, ExtractionConfig};

/// Date field extractor.
///
/// Scans numeric (`D/M/YYYY`, `DD.MM.YYYY`) and Hebrew named-month
/// (`14 אפריל 2025`) notations independently, then merges them into one
/// ascending, duplicate-free list.
#[derive(Debug, Clone, Default)]
pub struct DateExtractor {
    numeric_range: Option<DateRange>,
    validate_calendar: bool,
}

impl DateExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an extractor from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            numeric_range: config.numeric_date_range,
            validate_calendar: config.validate_calendar_dates,
        }
    }

    /// Only keep numeric-notation dates inside this range.
    pub fn with_numeric_range(mut self, range: Option<DateRange>) -> Self {
        self.numeric_range = range;
        self
    }

    /// Drop candidates that are not real calendar dates.
    pub fn with_calendar_validation(mut self, validate: bool) -> Self {
        self.validate_calendar = validate;
        self
    }

    fn numeric_dates(&self, text: &str) -> Vec<DateCandidate> {
        let mut found = Vec::new();

        for caps in DATE_NUMERIC.captures_iter(text) {
            if !bounded(text, &caps) {
                continue;
            }
            let Some(date) = candidate(&caps[3], &caps[2], &caps[1]) else {
                continue;
            };
            if let Some(range) = &self.numeric_range {
                if !range.contains(&date) {
                    trace!("Numeric date {} outside {}..={}", date, range.start, range.end);
                    continue;
                }
            }
            found.push(date);
        }

        found
    }

    fn named_month_dates(&self, text: &str) -> Vec<DateCandidate> {
        let mut found = Vec::new();

        for caps in DATE_HEBREW_LONG.captures_iter(text) {
            if !bounded(text, &caps) {
                continue;
            }
            let Some(month) = hebrew_month_number(&caps[2]) else {
                continue;
            };
            if let Some(date) = candidate(&caps[3], &month.to_string(), &caps[1]) {
                found.push(date);
            }
        }

        found
    }
}

impl FieldExtractor for DateExtractor {
    type Output = DateCandidate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let numeric = self.numeric_dates(text);
        let named = self.named_month_dates(text);
        debug!(
            "Found {} numeric and {} named-month dates",
            numeric.len(),
            named.len()
        );

        let unique: BTreeSet<DateCandidate> = numeric
            .into_iter()
            .chain(named)
            .filter(|date| {
                if self.validate_calendar && date.to_naive_date().is_none() {
                    trace!("Dropping non-calendar date {}", date);
                    return false;
                }
                true
            })
            .collect();

        unique.into_iter().collect()
    }
}

/// Extract all dates with the default (unrestricted) extractor.
pub fn extract_dates(text: &str) -> Vec<DateCandidate> {
    DateExtractor::new().extract_all(text)
}

fn bounded(text: &str, caps: &Captures<'_>) -> bool {
    caps.get(0)
        .map(|m| digit_bounded(text, m.start(), m.end()))
        .unwrap_or(false)
}

fn candidate(year: &str, month: &str, day: &str) -> Option<DateCandidate> {
    Some(DateCandidate::new(
        year.parse().ok()?,
        month.parse().ok()?,
        day.parse().ok()?,
    ))
}
