use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;

use crate::backend::{BackendError, PdfBackend};
use crate::text_processing::{expand_ligatures, join_pages};

/// Why an extraction produced no text.
///
/// There is one failure kind from the caller's point of view; the variants
/// only record where the failure came from.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("PDF backend panicked: {0}")]
    Panicked(String),
}

/// Extracts the plain text of a whole PDF through a [`PdfBackend`].
///
/// The result is every page's text in document order, each followed by a
/// newline. Any failure while opening the document or reading any page
/// discards the pages read so far.
pub struct PdfTextExtractor<B> {
    backend: B,
    expand_ligatures: bool,
}

impl<B: PdfBackend> PdfTextExtractor<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            expand_ligatures: false,
        }
    }

    /// Replace typographic ligatures (`ﬁ`, `ﬂ`, ...) in each page's text.
    pub fn with_ligature_expansion(mut self, enabled: bool) -> Self {
        self.expand_ligatures = enabled;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Extract the text of the PDF at `path`.
    ///
    /// The path is handed to the backend as-is; a missing file or a
    /// non-PDF surfaces as a backend error. A panic inside the backend is
    /// caught and reported as [`ExtractError::Panicked`].
    pub fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let pages = panic::catch_unwind(AssertUnwindSafe(|| self.backend.page_texts(path)))
            .map_err(|payload| ExtractError::Panicked(panic_message(payload.as_ref())))??;

        tracing::debug!(path = %path.display(), pages = pages.len(), "extracted page texts");

        let text = if self.expand_ligatures {
            let pages: Vec<String> = pages.iter().map(|p| expand_ligatures(p)).collect();
            join_pages(&pages)
        } else {
            join_pages(&pages)
        };
        Ok(text)
    }

    /// Like [`extract`](Self::extract), but a failure is returned as its
    /// description instead of an error, so the result is always printable.
    pub fn extract_lossy(&self, path: &Path) -> String {
        match self.extract(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "extraction failed");
                e.to_string()
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBackend;

    #[test]
    fn pages_are_joined_in_order() {
        let extractor = PdfTextExtractor::new(MockBackend::with_pages(["T1", "T2", "T3"]));
        let text = extractor.extract(Path::new("doc.pdf")).unwrap();
        assert_eq!(text, "T1\nT2\nT3\n");
    }

    #[test]
    fn empty_page_contributes_empty_segment() {
        let extractor = PdfTextExtractor::new(MockBackend::with_pages(["Hello", "", "World"]));
        let text = extractor.extract(Path::new("doc.pdf")).unwrap();
        assert_eq!(text, "Hello\n\nWorld\n");
    }

    #[test]
    fn zero_pages_yield_empty_string() {
        let extractor = PdfTextExtractor::new(MockBackend::with_pages(Vec::<String>::new()));
        assert_eq!(extractor.extract(Path::new("empty.pdf")).unwrap(), "");
    }

    #[test]
    fn backend_error_is_propagated() {
        let extractor = PdfTextExtractor::new(MockBackend::failing(BackendError::OpenError(
            "no such file".into(),
        )));
        let err = extractor.extract(Path::new("missing.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::Backend(BackendError::OpenError(_))));
        assert_eq!(err.to_string(), "failed to open PDF: no such file");
    }

    #[test]
    fn lossy_returns_error_description() {
        let extractor = PdfTextExtractor::new(MockBackend::failing(
            BackendError::ExtractionError("bad xref".into()),
        ));
        let out = extractor.extract_lossy(Path::new("corrupt.pdf"));
        assert_eq!(out, "failed to extract text: bad xref");
    }

    #[test]
    fn lossy_returns_text_on_success() {
        let extractor = PdfTextExtractor::new(MockBackend::with_pages(["only page"]));
        assert_eq!(extractor.extract_lossy(Path::new("a.pdf")), "only page\n");
    }

    #[test]
    fn backend_panic_is_caught() {
        let extractor = PdfTextExtractor::new(MockBackend::panicking("font table overflow"));
        let err = extractor.extract(Path::new("weird.pdf")).unwrap_err();
        match err {
            ExtractError::Panicked(msg) => assert_eq!(msg, "font table overflow"),
            other => panic!("expected Panicked, got {other:?}"),
        }
        let out = extractor.extract_lossy(Path::new("weird.pdf"));
        assert!(out.contains("font table overflow"));
    }

    #[test]
    fn ligature_expansion_is_opt_in() {
        let raw = PdfTextExtractor::new(MockBackend::with_pages(["ﬁle"]));
        assert_eq!(raw.extract(Path::new("a.pdf")).unwrap(), "ﬁle\n");

        let expanded = PdfTextExtractor::new(MockBackend::with_pages(["ﬁle", "ﬂow"]))
            .with_ligature_expansion(true);
        assert_eq!(expanded.extract(Path::new("a.pdf")).unwrap(), "file\nflow\n");
    }

    #[test]
    fn repeated_extraction_is_identical() {
        let extractor = PdfTextExtractor::new(MockBackend::with_pages(["a", "b"]));
        let first = extractor.extract(Path::new("a.pdf")).unwrap();
        let second = extractor.extract(Path::new("a.pdf")).unwrap();
        assert_eq!(first, second);
        assert_eq!(extractor.backend().call_count(), 2);
    }
}
