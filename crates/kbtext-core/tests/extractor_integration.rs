//! Integration tests for [`PdfTextExtractor`] over the public API.
//!
//! These use [`MockBackend`] so no PDF library is involved; the MuPDF
//! backend has its own tests against generated documents.

use std::io;
use std::path::Path;

use kbtext_core::mock::{MockBackend, MockResponse};
use kbtext_core::{BackendError, ExtractError, PdfBackend, PdfTextExtractor};

#[test]
fn missing_file_yields_non_empty_description() {
    let backend = MockBackend::new(MockResponse::Io(
        io::ErrorKind::NotFound,
        "No such file or directory".into(),
    ));
    let extractor = PdfTextExtractor::new(backend);

    let err = extractor.extract(Path::new("/no/such.pdf")).unwrap_err();
    assert!(matches!(err, ExtractError::Backend(BackendError::Io(_))));

    let out = extractor.extract_lossy(Path::new("/no/such.pdf"));
    assert!(!out.is_empty());
    assert!(out.contains("No such file or directory"));
}

#[test]
fn mid_document_failure_discards_pages() {
    let extractor = PdfTextExtractor::new(MockBackend::new(MockResponse::ExtractionError(
        "page 2: broken content stream".into(),
    )));
    let out = extractor.extract_lossy(Path::new("doc.pdf"));
    assert_eq!(out, "failed to extract text: page 2: broken content stream");
}

#[test]
fn borrowed_and_boxed_backends_work() {
    let mock = MockBackend::with_pages(["x"]);
    let by_ref = PdfTextExtractor::new(&mock);
    assert_eq!(by_ref.extract(Path::new("a.pdf")).unwrap(), "x\n");
    assert_eq!(mock.call_count(), 1);

    let boxed: Box<dyn PdfBackend> = Box::new(MockBackend::with_pages(["y", "z"]));
    let extractor = PdfTextExtractor::new(boxed);
    assert_eq!(extractor.extract(Path::new("a.pdf")).unwrap(), "y\nz\n");
}

#[test]
fn many_pages_keep_document_order() {
    let pages: Vec<String> = (1..=50).map(|i| format!("page {i}")).collect();
    let expected: String = pages.iter().map(|p| format!("{p}\n")).collect();
    let extractor = PdfTextExtractor::new(MockBackend::with_pages(pages));
    assert_eq!(extractor.extract(Path::new("long.pdf")).unwrap(), expected);
}
