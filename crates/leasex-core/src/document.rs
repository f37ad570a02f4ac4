//! Text acquisition for lease documents.
//!
//! Turning a file into text is the only fallible step before extraction.
//! Callers that must keep going use [`read_text_or_empty`], which turns
//! every failure into an empty string so the extractors report no
//! candidates instead of aborting a batch.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{LeaseError, Result};
use crate::pdf::PdfExtractor;

/// Document formats leasex can read text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF with a text layer.
    Pdf,
    /// Already-extracted UTF-8 text.
    Text,
}

impl DocumentKind {
    /// Detect the kind from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Read the text layer of a document.
pub fn read_document_text(path: &Path) -> Result<String> {
    let kind = DocumentKind::from_path(path)
        .ok_or_else(|| LeaseError::UnsupportedDocument(path.display().to_string()))?;

    let text = match kind {
        DocumentKind::Pdf => {
            let data = fs::read(path)?;
            PdfExtractor::text_from_bytes(&data)?
        }
        DocumentKind::Text => fs::read_to_string(path)?,
    };

    debug!("Read {} characters from {}", text.len(), path.display());
    Ok(text)
}

/// Read the text layer of a document, substituting an empty string on failure.
pub fn read_text_or_empty(path: &Path) -> String {
    read_document_text(path).unwrap_or_else(|e| {
        warn!("Could not read text from {}: {}", path.display(), e);
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(DocumentKind::from_path(Path::new("a.PDF")), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_path(Path::new("a.txt")), Some(DocumentKind::Text));
        assert_eq!(DocumentKind::from_path(Path::new("a.docx")), None);
        assert_eq!(DocumentKind::from_path(Path::new("a")), None);
    }

    #[test]
    fn test_reads_text_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lease.txt");
        fs::write(&path, "השוכר: דנה לוי").unwrap();
        assert_eq!(read_document_text(&path).unwrap(), "השוכר: דנה לוי");
    }

    #[test]
    fn test_unsupported_extension() {
        let result = read_document_text(Path::new("lease.docx"));
        assert!(matches!(result, Err(LeaseError::UnsupportedDocument(_))));
    }

    #[test]
    fn test_failures_become_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.pdf");
        fs::write(&broken, b"not a pdf").unwrap();

        assert_eq!(read_text_or_empty(&broken), "");
        assert_eq!(read_text_or_empty(&dir.path().join("missing.txt")), "");
    }
}
