//! PDF text extraction.
//!
//! Extraction is delegated entirely to the `pdf-extract` crate; this
//! module only maps its failures into the ingestion error variant.

use std::path::Path;

use askpdf_core::error::{AskPdfError, Result};

/// Extract the plain text of the document at `path`.
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path)
        .map_err(|e| AskPdfError::Ingestion(format!("Failed to extract {}: {e}", path.display())))
}
