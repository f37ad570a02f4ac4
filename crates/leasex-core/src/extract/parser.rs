//! Lease parser composing the rule-based field extractors.

use std::time::Instant;

use tracing::{debug, info};

use super::rules::{AmountExtractor, DateExtractor, FieldExtractor, TenantExtractor};
use crate::models::candidates::LeaseCandidates;
use crate::models::config::{ExtractionConfig, Preset};

/// Result of running all extractors over one document.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Candidate values for the caller to confirm.
    pub candidates: LeaseCandidates,
    /// Fields that produced nothing.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Stateless lease parser. Safe to share between threads; every call
/// works only on the text it is given.
#[derive(Debug, Clone)]
pub struct LeaseParser {
    dates: DateExtractor,
    amounts: AmountExtractor,
    tenant: TenantExtractor,
}

impl LeaseParser {
    /// Create a parser from extraction settings.
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            dates: DateExtractor::from_config(config),
            amounts: AmountExtractor::from_config(config),
            tenant: TenantExtractor::new(),
        }
    }

    /// Create a parser for one of the built-in presets.
    pub fn preset(preset: Preset) -> Self {
        Self::new(&ExtractionConfig::for_preset(preset))
    }

    /// Run the extractors and collect their candidates.
    pub fn extract(&self, text: &str) -> LeaseCandidates {
        LeaseCandidates {
            dates: self.dates.extract_all(text),
            amounts: self.amounts.extract_all(text),
            tenant: self.tenant.extract(text),
        }
    }

    /// Run the extractors and report which fields came up empty.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        info!("Parsing lease from {} characters of text", text.len());

        let candidates = self.extract(text);

        let mut warnings = Vec::new();
        if candidates.dates.is_empty() {
            warnings.push("Could not extract any dates".to_string());
        }
        if candidates.amounts.is_empty() {
            warnings.push("Could not extract any amounts".to_string());
        }
        if candidates.tenant.is_none() {
            warnings.push("Could not extract tenant name".to_string());
        }

        debug!(
            "Extracted {} dates, {} amounts, tenant {:?}",
            candidates.dates.len(),
            candidates.amounts.len(),
            candidates.tenant
        );

        ExtractionResult {
            candidates,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for LeaseParser {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}
