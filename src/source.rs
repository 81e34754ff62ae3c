//! Access to the pages of a loaded PDF document.
//!
//! [`TextSource`] isolates the concrete PDF library from the
//! classification logic: the scanner only ever asks for the ordered page
//! numbers and the text of one page. [`PdfSource`] is the lopdf-backed
//! implementation used in production; tests substitute their own sources.

use std::io::{self, Read, Write};
use std::path::Path;

use lopdf::Document;

use crate::detect;
use crate::error::{Error, Result};

/// Abstract interface over a loaded document.
///
/// The only capability the cleaning pass needs from a page is "attempt to
/// extract its text"; everything else about a page is opaque.
pub trait TextSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// 1-based page numbers in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Extract all text content of one page.
    fn page_text(&self, page: u32) -> Result<String>;
}

/// [`TextSource`] backed by a `lopdf::Document`.
pub struct PdfSource {
    doc: Document,
}

impl PdfSource {
    /// Load a document from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !detect::is_pdf_file(path)? {
            return Err(Error::NotAPdf);
        }
        let doc = Document::load(path)?;
        Self::from_document(doc)
    }

    /// Load a document from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        if !detect::is_pdf_bytes(data) {
            return Err(Error::NotAPdf);
        }
        let doc = Document::load_mem(data)?;
        Self::from_document(doc)
    }

    /// Load a document from a reader.
    ///
    /// The stream is staged to a named temporary file before parsing. The
    /// staging file is removed when this function returns, on the error
    /// paths as much as on success.
    pub fn load_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut staged = tempfile::NamedTempFile::new()?;
        io::copy(&mut reader, &mut staged)?;
        staged.flush()?;
        Self::load_file(staged.path())
    }

    fn from_document(doc: Document) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// Declared PDF version of the document (e.g. `"1.7"`).
    pub fn version(&self) -> String {
        self.doc.version.clone()
    }

    /// Consume the source and return the underlying document.
    ///
    /// Used by the rebuild step, which mutates the document in place.
    pub fn into_document(self) -> Document {
        self.doc
    }
}

impl TextSource for PdfSource {
    fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    fn page_numbers(&self) -> Vec<u32> {
        self.doc.get_pages().keys().copied().collect()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        let pages = self.doc.get_pages();
        if !pages.contains_key(&page) {
            return Err(Error::PageOutOfRange {
                page,
                total: pages.len() as u32,
            });
        }
        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract(e.to_string()))
    }
}
