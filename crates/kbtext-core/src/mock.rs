//! Mock PDF backend for testing.

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PdfBackend};

/// A configurable mock response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a document with these page texts.
    Pages(Vec<String>),
    /// Simulate a document that cannot be opened.
    OpenError(String),
    /// Simulate a failure while reading a page.
    ExtractionError(String),
    /// Simulate an I/O failure such as a missing file.
    Io(io::ErrorKind, String),
    /// Panic inside the backend with this message.
    Panic(String),
}

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
///
/// Every call returns the same response; calls are counted via
/// [`call_count()`](MockBackend::call_count).
pub struct MockBackend {
    response: MockResponse,
    call_count: AtomicUsize,
}

impl MockBackend {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn with_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MockResponse::Pages(
            pages.into_iter().map(Into::into).collect(),
        ))
    }

    /// Fail every call with an error equivalent to `err`.
    pub fn failing(err: BackendError) -> Self {
        let response = match err {
            BackendError::OpenError(msg) => MockResponse::OpenError(msg),
            BackendError::ExtractionError(msg) => MockResponse::ExtractionError(msg),
            BackendError::Io(e) => MockResponse::Io(e.kind(), e.to_string()),
        };
        Self::new(response)
    }

    pub fn panicking(message: impl Into<String>) -> Self {
        Self::new(MockResponse::Panic(message.into()))
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl PdfBackend for MockBackend {
    fn page_texts(&self, _path: &Path) -> Result<Vec<String>, BackendError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.response {
            MockResponse::Pages(pages) => Ok(pages.clone()),
            MockResponse::OpenError(msg) => Err(BackendError::OpenError(msg.clone())),
            MockResponse::ExtractionError(msg) => {
                Err(BackendError::ExtractionError(msg.clone()))
            }
            MockResponse::Io(kind, msg) => Err(io::Error::new(*kind, msg.clone()).into()),
            MockResponse::Panic(msg) => panic!("{msg}"),
        }
    }
}
