//! Contract records assembled from extraction candidates.
//!
//! The engine never decides which date starts a lease or which amount is
//! the rent. These types apply the caller policy: earliest date is the
//! start, latest is the end, first amount is the monthly rent.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::extract::property_label;
use crate::models::candidates::{DateCandidate, LeaseCandidates};
use crate::models::config::OutputConfig;

/// A contract row ready to hand to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDraft {
    pub tenant_name: Option<String>,
    pub property: String,
    pub start_date: Option<DateCandidate>,
    pub end_date: Option<DateCandidate>,
    pub monthly_rent: Option<u64>,
    pub currency: String,
    pub pdf_path: Option<String>,
    /// Leading part of the document text.
    pub raw_text: String,
}

impl ContractDraft {
    /// Build a draft for the document at `path`.
    pub fn from_candidates(
        path: &Path,
        candidates: &LeaseCandidates,
        text: &str,
        output: &OutputConfig,
    ) -> Self {
        Self {
            tenant_name: candidates.tenant.clone(),
            property: property_label(path),
            start_date: candidates.earliest_date(),
            end_date: candidates.latest_date(),
            monthly_rent: candidates.first_amount(),
            currency: output.currency.clone(),
            pdf_path: Some(path.to_string_lossy().into_owned()),
            raw_text: truncate_chars(text, output.raw_text_chars).to_string(),
        }
    }
}

/// What a reviewer sees for one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPreview {
    pub filename: String,
    pub property: String,
    pub tenant: Option<String>,
    pub dates: Vec<DateCandidate>,
    pub amounts: Vec<u64>,
    pub start_date: Option<DateCandidate>,
    pub end_date: Option<DateCandidate>,
    pub monthly_rent: Option<u64>,
    pub text_preview: String,
}

impl ScanPreview {
    pub fn from_candidates(
        path: &Path,
        candidates: LeaseCandidates,
        text: &str,
        output: &OutputConfig,
    ) -> Self {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            filename,
            property: property_label(path),
            start_date: candidates.earliest_date(),
            end_date: candidates.latest_date(),
            monthly_rent: candidates.first_amount(),
            tenant: candidates.tenant,
            dates: candidates.dates,
            amounts: candidates.amounts,
            text_preview: truncate_chars(text, output.text_preview_chars).to_string(),
        }
    }
}

/// The first `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidates() -> LeaseCandidates {
        LeaseCandidates {
            dates: vec![
                DateCandidate::new(2024, 6, 30),
                DateCandidate::new(2024, 7, 1),
                DateCandidate::new(2025, 6, 30),
            ],
            amounts: vec![3800, 7600],
            tenant: Some("נוף מנדל".to_string()),
        }
    }

    #[test]
    fn test_draft_policy() {
        let output = OutputConfig::default();
        let draft = ContractDraft::from_candidates(
            Path::new("/leases/תובל 22.pdf"),
            &candidates(),
            "טקסט",
            &output,
        );

        assert_eq!(draft.property, "תובל 22");
        assert_eq!(draft.start_date, Some(DateCandidate::new(2024, 6, 30)));
        assert_eq!(draft.end_date, Some(DateCandidate::new(2025, 6, 30)));
        assert_eq!(draft.monthly_rent, Some(3800));
        assert_eq!(draft.tenant_name.as_deref(), Some("נוף מנדל"));
        assert_eq!(draft.currency, "ILS");
        assert_eq!(draft.pdf_path.as_deref(), Some("/leases/תובל 22.pdf"));
    }

    #[test]
    fn test_draft_from_empty_candidates() {
        let draft = ContractDraft::from_candidates(
            Path::new("x.pdf"),
            &LeaseCandidates::default(),
            "",
            &OutputConfig::default(),
        );
        assert_eq!(draft.start_date, None);
        assert_eq!(draft.end_date, None);
        assert_eq!(draft.monthly_rent, None);
        assert_eq!(draft.tenant_name, None);
    }

    #[test]
    fn test_single_date_is_both_start_and_end() {
        let candidates = LeaseCandidates {
            dates: vec![DateCandidate::new(2025, 1, 1)],
            ..Default::default()
        };
        let preview = ScanPreview::from_candidates(
            Path::new("a.txt"),
            candidates,
            "",
            &OutputConfig::default(),
        );
        assert_eq!(preview.start_date, preview.end_date);
        assert_eq!(preview.filename, "a.txt");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let output = OutputConfig {
            text_preview_chars: 3,
            ..Default::default()
        };
        let preview =
            ScanPreview::from_candidates(Path::new("a.pdf"), candidates(), "שלום עולם", &output);
        assert_eq!(preview.text_preview, "שלו");
        assert_eq!(preview.amounts, vec![3800, 7600]);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
        assert_eq!(truncate_chars("דנה לוי", 3), "דנה");
    }

    #[test]
    fn test_draft_serializes_dates_as_strings() {
        let draft = ContractDraft::from_candidates(
            Path::new("a.pdf"),
            &candidates(),
            "",
            &OutputConfig::default(),
        );
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["start_date"], "2024-06-30");
        assert_eq!(json["monthly_rent"], 3800);
    }
}
