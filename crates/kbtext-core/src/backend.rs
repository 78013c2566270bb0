use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors open the document, walk its pages in document order and
/// return one plain-text string per page. Joining the pages into the final
/// output lives in [`crate::PdfTextExtractor`].
///
/// The opened document must not outlive the call: implementations hold it
/// as a local so it is released on every return path.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of every page, in order. Index `i` of the result is
    /// page `i` of the document. Pages without extractable text yield `""`.
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, BackendError>;
}

impl<B: PdfBackend + ?Sized> PdfBackend for &B {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, BackendError> {
        (**self).page_texts(path)
    }
}

impl<B: PdfBackend + ?Sized> PdfBackend for Box<B> {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, BackendError> {
        (**self).page_texts(path)
    }
}
