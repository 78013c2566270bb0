use std::path::Path;

use mupdf::{Document, Page, TextPageFlags};

use kbtext_core::{BackendError, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the core crate does not transitively
/// depend on it.
///
/// By default every text block on a page is kept. Header and footer
/// exclusion can be switched on to drop running heads and page numbers.
#[derive(Debug, Clone, Default)]
pub struct MupdfBackend {
    /// Fraction of page height from bottom to exclude as footer (0.0–1.0).
    /// `None` disables footer exclusion.
    footer_exclusion_ratio: Option<f32>,
    /// Fraction of page height from top to exclude as header (0.0–1.0).
    /// `None` disables header exclusion.
    header_exclusion_ratio: Option<f32>,
}

impl MupdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the footer exclusion ratio. Pass `0.0` to disable.
    pub fn with_footer_exclusion(mut self, ratio: f32) -> Self {
        self.footer_exclusion_ratio = if ratio > 0.0 { Some(ratio) } else { None };
        self
    }

    /// Set the header exclusion ratio. Pass `0.0` to disable.
    pub fn with_header_exclusion(mut self, ratio: f32) -> Self {
        self.header_exclusion_ratio = if ratio > 0.0 { Some(ratio) } else { None };
        self
    }

    /// Text of one page: lines joined with `\n`, no trailing newline.
    fn page_text(&self, page: &Page) -> Result<String, mupdf::Error> {
        let text_page = page.to_text_page(TextPageFlags::empty())?;

        // Get page bounds for header/footer exclusion
        let page_bounds = page.bounds()?;
        let page_height = page_bounds.y1 - page_bounds.y0;

        let header_threshold = self
            .header_exclusion_ratio
            .map(|r| page_bounds.y0 + page_height * r);
        let footer_threshold = self
            .footer_exclusion_ratio
            .map(|r| page_bounds.y1 - page_height * r);

        let mut lines = Vec::new();
        for block in text_page.blocks() {
            let block_bounds = block.bounds();

            // Skip blocks entirely within the header region
            if let Some(threshold) = header_threshold
                && block_bounds.y1 <= threshold
            {
                continue;
            }

            // Skip blocks whose top edge is in the footer region
            if let Some(threshold) = footer_threshold
                && block_bounds.y0 >= threshold
            {
                continue;
            }

            for line in block.lines() {
                let line_text: String = line
                    .chars()
                    .map(|c| c.char().unwrap_or('\u{FFFD}'))
                    .collect();
                lines.push(line_text);
            }
        }

        Ok(lines.join("\n"))
    }
}

impl PdfBackend for MupdfBackend {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut pages_text = Vec::new();

        for (index, page_result) in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
            .enumerate()
        {
            let page = page_result
                .map_err(|e| BackendError::ExtractionError(format!("page {}: {e}", index + 1)))?;
            let text = self
                .page_text(&page)
                .map_err(|e| BackendError::ExtractionError(format!("page {}: {e}", index + 1)))?;
            if text.is_empty() {
                tracing::debug!(page = index + 1, "page has no extractable text");
            }
            pages_text.push(text);
        }

        tracing::debug!(
            path = %path.display(),
            pages = pages_text.len(),
            "mupdf extraction complete"
        );
        Ok(pages_text)
    }
}
