//! Core library for Hebrew lease document processing.
//!
//! This crate provides:
//! - Text acquisition from PDF and plain-text documents
//! - Rule-based field extraction (dates, rent amounts, tenant name)
//! - Contract drafts built from extraction candidates
//! - Configuration with interactive and batch presets

pub mod document;
pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;

pub use document::{read_document_text, read_text_or_empty, DocumentKind};
pub use error::{ConfigError, LeaseError, PdfError, Result};
pub use extract::{
    extract_amounts, extract_dates, extract_tenant, property_label, ExtractionResult,
    FieldExtractor, LeaseParser,
};
pub use models::candidates::{DateCandidate, LeaseCandidates};
pub use models::config::{ExtractionConfig, LeaseConfig, Preset};
pub use models::contract::{ContractDraft, ScanPreview};
pub use pdf::{PdfExtractor, PdfProcessor};
