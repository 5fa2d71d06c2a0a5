//! # PDF Module
//!
//! Pulls the text of a page range out of a PDF. Parsing the file format is
//! left entirely to `lopdf`; this module only resolves which pages to ask for
//! and joins what comes back.

mod document;
#[cfg(test)]
pub(crate) mod fixtures;
mod page_range;

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

pub use self::document::PdfDocument;
pub use self::page_range::{PageRange, PageRangeError};

/// Shown in place of the text when the page range cannot be honoured.
pub const INVALID_RANGE_MESSAGE: &str = "Invalid page range or page number.";
/// Shown in place of the text when the file itself could not be read.
pub const EXTRACTION_FAILED_MESSAGE: &str = "Unable to extract text from the selected file.";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid page range: {0}")]
    InvalidRange(#[from] PageRangeError),
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF library error: {0}")]
    Pdf(String),
}

impl ExtractError {
    /// The text displayed to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractError::InvalidRange(_) => INVALID_RANGE_MESSAGE,
            ExtractError::Io(_) | ExtractError::Pdf(_) => EXTRACTION_FAILED_MESSAGE,
        }
    }
}

/// Anything that can hand out the text of a page by zero-based index.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, index: usize) -> Result<String, ExtractError>;
}

/// Extracts the pages named by `range_input`, newline-joined in page order.
pub fn extract_pages<S: PageSource + ?Sized>(
    source: &S,
    range_input: &str,
) -> Result<String, ExtractError> {
    let range: PageRange = range_input.parse()?;
    let indices = range.resolve(source.page_count())?;
    debug!("Extracting page indices {:?}", indices);

    let pages = indices
        .map(|index| source.page_text(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pages.join("\n"))
}

/// Opens `path`, extracts the requested pages and drops the document.
pub fn extract_file(path: &Path, range_input: &str) -> Result<String, ExtractError> {
    let document = PdfDocument::open(path)?;
    info!(
        "Opened {} ({} pages), range {:?}",
        path.display(),
        document.page_count(),
        range_input.trim()
    );
    extract_pages(&document, range_input)
}

/// Text to display for an extraction attempt, whatever its outcome.
pub fn display_text(result: Result<String, ExtractError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("Extraction failed: {}", e);
            e.user_message().to_string()
        }
    }
}
