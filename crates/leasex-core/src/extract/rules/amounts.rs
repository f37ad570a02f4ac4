//! Amount extraction for Hebrew lease documents.

use tracing::{debug, trace};

use std::ops::Range;

use super::patterns::{
    AMOUNT_BARE, AMOUNT_MARKER_AFTER, AMOUNT_MARKER_BEFORE, DATE_HEBREW_LONG, DATE_NUMERIC,
};
use super::{digit_bounded, FieldExtractor};
use crate::models::config::ExtractionConfig;

/// Amount field extractor.
///
/// A number counts when a currency marker sits right before or after it,
/// or, unless a marker is required, when it stands alone with at least
/// three digits. A marker between two numbers counts for both. Numbers
/// inside a date token (the year of `01/05/2025`) are skipped. Only values
/// inside the plausibility window are kept.
#[derive(Debug, Clone)]
pub struct AmountExtractor {
    min: u64,
    max: u64,
    require_currency_marker: bool,
}

impl AmountExtractor {
    pub fn new(min: u64, max: u64) -> Self {
        Self {
            min,
            max,
            require_currency_marker: true,
        }
    }

    /// Build an extractor from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            min: config.min_amount,
            max: config.max_amount,
            require_currency_marker: config.require_currency_marker,
        }
    }

    /// Set whether a currency marker is required.
    pub fn with_currency_marker(mut self, required: bool) -> Self {
        self.require_currency_marker = required;
        self
    }

    fn in_window(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = u64;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut spans: Vec<Range<usize>> = AMOUNT_MARKER_BEFORE
            .captures_iter(text)
            .chain(AMOUNT_MARKER_AFTER.captures_iter(text))
            .filter_map(|caps| caps.get(1))
            .map(|m| m.range())
            .collect();
        if !self.require_currency_marker {
            spans.extend(AMOUNT_BARE.find_iter(text).map(|m| m.range()));
        }
        // Stable: at equal starts the marked span, found first, wins.
        spans.sort_by_key(|span| span.start);
        spans.dedup_by_key(|span| span.start);

        let dates = date_spans(text);
        let mut results: Vec<u64> = Vec::new();

        for span in spans {
            let number = &text[span.clone()];
            if dates
                .iter()
                .any(|date| date.start <= span.start && span.end <= date.end)
            {
                trace!("Skipping date part {:?}", number);
                continue;
            }
            if !digit_bounded(text, span.start, span.end) {
                continue;
            }
            let Some(value) = parse_grouped_amount(number) else {
                trace!("Unparseable amount {:?}", number);
                continue;
            };
            if !self.in_window(value) {
                trace!("Amount {} outside {}..={}", value, self.min, self.max);
                continue;
            }
            if !results.contains(&value) {
                results.push(value);
            }
        }

        debug!("Found {} amount candidates", results.len());
        results
    }
}

fn date_spans(text: &str) -> Vec<Range<usize>> {
    DATE_NUMERIC
        .find_iter(text)
        .chain(DATE_HEBREW_LONG.find_iter(text))
        .map(|m| m.range())
        .collect()
}

/// Extract amounts with the given window and marker requirement.
pub fn extract_amounts(text: &str, config: &ExtractionConfig) -> Vec<u64> {
    AmountExtractor::from_config(config).extract_all(text)
}

/// Parse a number written with thousands commas (e.g. "4,500").
pub fn parse_grouped_amount(s: &str) -> Option<u64> {
    let digits: String = s.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Format an amount with thousands commas (4500 -> "4,500").
pub fn format_grouped_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    formatted
}
