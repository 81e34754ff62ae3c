//! # unblank
//!
//! Remove blank pages from PDF documents.
//!
//! A page is blank when its extracted text, after trimming surrounding
//! whitespace, is empty. Cleaning a document produces a new PDF holding
//! exactly the non-blank pages in their original order; a document with
//! no blank pages is reported as already clean and no output is produced
//! for it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unblank::{clean_file, CleanOutcome};
//!
//! fn main() -> unblank::Result<()> {
//!     match clean_file("report.pdf")? {
//!         CleanOutcome::AlreadyClean { report } => {
//!             println!("nothing to do ({} pages)", report.total_pages);
//!         }
//!         CleanOutcome::Cleaned { pdf, report } => {
//!             std::fs::write("cleaned_report.pdf", &pdf)?;
//!             println!("removed {} page(s)", report.removed());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior notes
//!
//! - Blankness is decided from extracted text alone: pages containing only
//!   images or vector drawings extract no text and are removed. There is
//!   no layout analysis and no OCR.
//! - A page whose text cannot be extracted is kept, and the failure is
//!   returned as a warning on the report rather than an error.
//! - Each document is processed in a single synchronous pass; documents
//!   never share state.

pub mod classify;
pub mod clean;
pub mod detect;
pub mod error;
pub mod source;

// Re-export commonly used types
pub use classify::{is_blank_text, PageWarning, Verdict};
pub use clean::{
    clean_document, scan, scan_with_observer, CleanOutcome, PageVerdict, ScanObserver, ScanReport,
};
pub use detect::{is_pdf_bytes, is_pdf_file, sniff_version};
pub use error::{Error, Result};
pub use source::{PdfSource, TextSource};

use std::io::Read;
use std::path::Path;

/// Scan a PDF file for blank pages without producing an output document.
///
/// # Example
///
/// ```no_run
/// let report = unblank::scan_file("document.pdf").unwrap();
/// println!("blank pages: {:?}", report.blank_pages);
/// ```
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<ScanReport> {
    let source = PdfSource::load_file(path)?;
    Ok(scan(&source))
}

/// Scan a PDF held in memory for blank pages.
pub fn scan_bytes(data: &[u8]) -> Result<ScanReport> {
    let source = PdfSource::load_bytes(data)?;
    Ok(scan(&source))
}

/// Remove blank pages from a PDF file.
///
/// # Example
///
/// ```no_run
/// let outcome = unblank::clean_file("document.pdf").unwrap();
/// println!("{}", outcome.summary("document.pdf"));
/// ```
pub fn clean_file<P: AsRef<Path>>(path: P) -> Result<CleanOutcome> {
    clean_file_with_observer(path, &mut ())
}

/// Remove blank pages from a PDF file, reporting progress to `observer`.
pub fn clean_file_with_observer<P: AsRef<Path>, O: ScanObserver>(
    path: P,
    observer: &mut O,
) -> Result<CleanOutcome> {
    let source = PdfSource::load_file(path)?;
    clean_document(source, observer)
}

/// Remove blank pages from a PDF held in memory.
pub fn clean_bytes(data: &[u8]) -> Result<CleanOutcome> {
    clean_bytes_with_observer(data, &mut ())
}

/// Remove blank pages from a PDF held in memory, reporting progress.
pub fn clean_bytes_with_observer<O: ScanObserver>(
    data: &[u8],
    observer: &mut O,
) -> Result<CleanOutcome> {
    let source = PdfSource::load_bytes(data)?;
    clean_document(source, observer)
}

/// Remove blank pages from a PDF read from a stream.
///
/// The stream is staged to a temporary file before parsing; the staging
/// file is reclaimed on every exit path.
pub fn clean_reader<R: Read>(reader: R) -> Result<CleanOutcome> {
    let source = PdfSource::load_reader(reader)?;
    clean_document(source, &mut ())
}
