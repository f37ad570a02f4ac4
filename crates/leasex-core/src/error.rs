//! Error types for the leasex-core library.
//!
//! Field extraction never fails; these errors come from the layers around
//! it (configuration, text acquisition, file I/O).

use thiserror::Error;

/// Main error type for the leasex library.
#[derive(Error, Debug)]
pub enum LeaseError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document type cannot be turned into text.
    #[error("unsupported document type: {0}")]
    UnsupportedDocument(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised while validating extraction settings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Amount window with the floor above the ceiling.
    #[error("invalid amount window: min {min} is greater than max {max}")]
    InvalidAmountWindow { min: u64, max: u64 },

    /// Date range with the start after the end.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: String, end: String },
}

/// Result type for the leasex library.
pub type Result<T> = std::result::Result<T, LeaseError>;
