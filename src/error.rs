//! Error types for the unblank library.

use std::io;
use thiserror::Error;

/// Result type alias for unblank operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while cleaning a document.
///
/// A failed text extraction on a single page is deliberately *not* an
/// `Error`: the page is kept and the failure is reported as a
/// [`PageWarning`](crate::PageWarning) on an otherwise successful scan.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not carry a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    NotAPdf,

    /// The document is encrypted; encrypted input is not supported.
    #[error("Document is encrypted")]
    Encrypted,

    /// The input stream could not be parsed as a PDF document.
    #[error("Failed to load document: {0}")]
    DocumentLoad(String),

    /// Extracting text from a page failed.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Serializing the cleaned document failed.
    #[error("Failed to write cleaned document: {0}")]
    Save(String),

    /// Page number is out of range.
    #[error("Page {page} is out of range (document has {total} pages)")]
    PageOutOfRange {
        /// Requested 1-based page number.
        page: u32,
        /// Number of pages in the document.
        total: u32,
    },
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::DocumentLoad(err.to_string()),
        }
    }
}
