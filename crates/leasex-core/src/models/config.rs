//! Configuration structures for the extraction pipeline.

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::models::candidates::DateCandidate;

/// Main configuration for leasex.
///
/// A profile section that lists only some keys takes the rest from its
/// own preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseConfig {
    /// Extraction settings for single documents reviewed by a person.
    pub interactive: ExtractionConfig,

    /// Extraction settings for unattended directory imports.
    #[serde(deserialize_with = "batch_section")]
    pub batch: ExtractionConfig,

    /// Text acquisition settings.
    pub pdf: PdfConfig,

    /// Output shaping settings.
    pub output: OutputConfig,
}

impl Default for LeaseConfig {
    fn default() -> Self {
        Self {
            interactive: ExtractionConfig::interactive(),
            batch: ExtractionConfig::batch(),
            pdf: PdfConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Overlay the keys present in a `batch` section on the batch preset.
fn batch_section<'de, D>(deserializer: D) -> std::result::Result<ExtractionConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Object(overrides) = serde_json::Value::deserialize(deserializer)? else {
        return Err(D::Error::custom("batch section must be an object"));
    };
    let mut merged = serde_json::to_value(ExtractionConfig::batch()).map_err(D::Error::custom)?;
    if let Some(base) = merged.as_object_mut() {
        base.extend(overrides);
    }
    serde_json::from_value(merged).map_err(D::Error::custom)
}

/// Which extraction profile to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Amounts 500 to 50,000, bare numbers accepted.
    Interactive,
    /// Amounts 1,000 to 100,000, currency marker required.
    Batch,
}

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the candidate falls inside the range. Compared field by
    /// field, so candidates that are not real calendar dates still order.
    pub fn contains(&self, date: &DateCandidate) -> bool {
        let start = DateCandidate::from(self.start);
        let end = DateCandidate::from(self.end);
        start <= *date && *date <= end
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Smallest amount accepted as rent (inclusive).
    pub min_amount: u64,

    /// Largest amount accepted as rent (inclusive).
    pub max_amount: u64,

    /// Only accept numbers next to a currency marker.
    pub require_currency_marker: bool,

    /// Restrict numeric-notation dates to this range.
    pub numeric_date_range: Option<DateRange>,

    /// Drop dates that are not real calendar dates (e.g. month 13).
    pub validate_calendar_dates: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::interactive()
    }
}

impl ExtractionConfig {
    /// Settings for documents a person reviews before saving.
    pub fn interactive() -> Self {
        Self {
            min_amount: 500,
            max_amount: 50_000,
            require_currency_marker: false,
            numeric_date_range: None,
            validate_calendar_dates: false,
        }
    }

    /// Settings for imports that go straight to storage.
    pub fn batch() -> Self {
        Self {
            min_amount: 1_000,
            max_amount: 100_000,
            require_currency_marker: true,
            numeric_date_range: NaiveDate::from_ymd_opt(2000, 1, 1)
                .zip(NaiveDate::from_ymd_opt(2035, 1, 1))
                .map(|(start, end)| DateRange::new(start, end)),
            validate_calendar_dates: false,
        }
    }

    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Interactive => Self::interactive(),
            Preset::Batch => Self::batch(),
        }
    }

    /// Set the amount window.
    pub fn with_amount_window(mut self, min: u64, max: u64) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// Set whether a currency marker is required.
    pub fn with_currency_marker(mut self, required: bool) -> Self {
        self.require_currency_marker = required;
        self
    }

    /// Set the calendar validity gate.
    pub fn with_calendar_validation(mut self, validate: bool) -> Self {
        self.validate_calendar_dates = validate;
        self
    }

    /// Set or clear the numeric date range.
    pub fn with_numeric_date_range(mut self, range: Option<DateRange>) -> Self {
        self.numeric_date_range = range;
        self
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.min_amount > self.max_amount {
            return Err(ConfigError::InvalidAmountWindow {
                min: self.min_amount,
                max: self.max_amount,
            });
        }
        if let Some(range) = &self.numeric_date_range {
            if range.start > range.end {
                return Err(ConfigError::InvalidDateRange {
                    start: range.start.to_string(),
                    end: range.end.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Text acquisition configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Below this many characters a PDF is reported as having no text layer.
    pub min_text_length: usize,

    /// File extensions picked up by directory scans (lowercase, no dot).
    pub extensions: Vec<String>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
            extensions: vec!["pdf".to_string(), "txt".to_string()],
        }
    }
}

/// Output shaping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Characters of text shown with an interactive preview.
    pub text_preview_chars: usize,

    /// Characters of raw text stored with an imported contract.
    pub raw_text_chars: usize,

    /// Currency code recorded on contract drafts.
    pub currency: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            text_preview_chars: 500,
            raw_text_chars: 2000,
            currency: "ILS".to_string(),
        }
    }
}

impl LeaseConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Extraction settings for a preset.
    pub fn extraction(&self, preset: Preset) -> &ExtractionConfig {
        match preset {
            Preset::Interactive => &self.interactive,
            Preset::Batch => &self.batch,
        }
    }

    /// Check both extraction profiles.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.interactive.validate()?;
        self.batch.validate()
    }
}
