//! PDF text extraction using lopdf and pdf-extract.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text layer extractor.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF and return its text in one step.
    pub fn text_from_bytes(data: &[u8]) -> Result<String> {
        let mut extractor = Self::new();
        extractor.load(data)?;
        extractor.extract_text()
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Owner-password-only PDFs open with an empty user password
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf_extract works on bytes, so keep the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        let text = catch_extraction_panic(|| {
            pdf_extract::extract_text_from_mem(&self.raw_data)
                .map_err(|e| PdfError::TextExtraction(e.to_string()))
        })?;
        debug!("Extracted {} characters of PDF text", text.len());
        Ok(text)
    }
}

/// Run a text extraction, turning a panic inside the PDF decoder into
/// `PdfError::TextExtraction`. Malformed fonts and encodings can panic
/// deep inside pdf-extract.
fn catch_extraction_panic<F>(extract: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    panic::catch_unwind(AssertUnwindSafe(extract)).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        warn!("PDF text extraction panicked: {}", message);
        Err(PdfError::TextExtraction(format!("decoder panicked: {}", message)))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
