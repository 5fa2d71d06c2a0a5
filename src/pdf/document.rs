//! lopdf-backed document handle.

use std::fs;
use std::path::Path;

use lopdf::Document;

use super::{ExtractError, PageSource};

/// An opened PDF. Lives only as long as one extraction.
pub struct PdfDocument {
    inner: Document,
    // lopdf numbers pages from 1, in page-tree order
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractError> {
        let inner = Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;
        let page_numbers = inner.get_pages().into_keys().collect();
        Ok(Self {
            inner,
            page_numbers,
        })
    }

    /// Reads the whole file in binary mode; the file is closed before parsing.
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        let page_number = *self
            .page_numbers
            .get(index)
            .ok_or_else(|| ExtractError::Pdf(format!("no page at index {index}")))?;
        self.inner
            .extract_text(&[page_number])
            .map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}
