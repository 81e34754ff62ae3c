//! Scanning documents for blank pages and rebuilding them without.
//!
//! [`scan`] walks the pages in document order and produces one
//! [`Verdict`] per page; [`clean_document`] rebuilds the document from the
//! kept pages. When no page is blank, no output document is produced at
//! all and the input is reported as already clean.

use serde::{Deserialize, Serialize};

use crate::classify::{classify_page, PageWarning, Verdict};
use crate::error::{Error, Result};
use crate::source::{PdfSource, TextSource};

/// Observer invoked synchronously after each page verdict.
///
/// This is how a front end renders progress; the scan itself never
/// depends on one being attached. The unit type is the no-op observer:
/// `scan_with_observer(&source, &mut ())`.
pub trait ScanObserver {
    /// Called once per page, in document order.
    fn on_page(&mut self, page: u32, total: u32, verdict: Verdict) {
        let _ = (page, total, verdict);
    }
}

impl ScanObserver for () {}

/// Verdict for a single page, paired with its page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageVerdict {
    /// 1-based page number.
    pub page: u32,
    /// The classification result.
    pub verdict: Verdict,
}

/// Result of scanning a document for blank pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Page count of the input document, fixed before iteration.
    pub total_pages: u32,
    /// One verdict per page, in document order.
    pub verdicts: Vec<PageVerdict>,
    /// Page numbers classified blank, in document order.
    pub blank_pages: Vec<u32>,
    /// Non-fatal extraction failures; the affected pages were kept.
    pub warnings: Vec<PageWarning>,
}

impl ScanReport {
    /// Number of pages that would be removed.
    pub fn removed(&self) -> u32 {
        self.blank_pages.len() as u32
    }

    /// Number of pages that would be kept.
    pub fn kept(&self) -> u32 {
        self.total_pages - self.removed()
    }

    /// Whether the document has no blank pages.
    pub fn is_clean(&self) -> bool {
        self.blank_pages.is_empty()
    }
}

/// Scan all pages of a source, without an observer attached.
pub fn scan<S: TextSource>(source: &S) -> ScanReport {
    scan_with_observer(source, &mut ())
}

/// Scan all pages of a source, reporting each verdict to `observer`.
pub fn scan_with_observer<S, O>(source: &S, observer: &mut O) -> ScanReport
where
    S: TextSource,
    O: ScanObserver,
{
    let pages = source.page_numbers();
    let total_pages = pages.len() as u32;

    let mut verdicts = Vec::with_capacity(pages.len());
    let mut blank_pages = Vec::new();
    let mut warnings = Vec::new();

    for page in pages {
        let (verdict, warning) = classify_page(source, page);
        log::debug!("page {page}/{total_pages}: {verdict:?}");
        if verdict.is_blank() {
            blank_pages.push(page);
        }
        if let Some(w) = warning {
            warnings.push(w);
        }
        verdicts.push(PageVerdict { page, verdict });
        observer.on_page(page, total_pages, verdict);
    }

    ScanReport {
        total_pages,
        verdicts,
        blank_pages,
        warnings,
    }
}

/// Outcome of cleaning a document.
#[derive(Debug)]
pub enum CleanOutcome {
    /// No blank pages were found; no replacement document is produced.
    AlreadyClean {
        /// The scan that found nothing to remove.
        report: ScanReport,
    },
    /// Blank pages were removed.
    Cleaned {
        /// The serialized cleaned document.
        pdf: Vec<u8>,
        /// The scan behind the removal.
        report: ScanReport,
    },
}

impl CleanOutcome {
    /// The scan report behind this outcome.
    pub fn report(&self) -> &ScanReport {
        match self {
            CleanOutcome::AlreadyClean { report } | CleanOutcome::Cleaned { report, .. } => report,
        }
    }

    /// Number of removed pages.
    pub fn removed(&self) -> u32 {
        self.report().removed()
    }

    /// Page count of the input document.
    pub fn total_pages(&self) -> u32 {
        self.report().total_pages
    }

    /// Serialized cleaned document, if one was produced.
    pub fn pdf(&self) -> Option<&[u8]> {
        match self {
            CleanOutcome::AlreadyClean { .. } => None,
            CleanOutcome::Cleaned { pdf, .. } => Some(pdf),
        }
    }

    /// Human-readable one-line summary for the named document.
    pub fn summary(&self, name: &str) -> String {
        match self {
            CleanOutcome::AlreadyClean { report } => format!(
                "No blank pages found in {} (Total pages: {})",
                name, report.total_pages
            ),
            CleanOutcome::Cleaned { report, .. } => format!(
                "Removed {} blank page(s) from {} total pages in {}",
                report.removed(),
                report.total_pages,
                name
            ),
        }
    }
}

/// Scan a document and rebuild it without its blank pages.
///
/// Consumes the source: the rebuild mutates the underlying document.
/// When the scan finds no blank page the document is left untouched and
/// [`CleanOutcome::AlreadyClean`] is returned without serializing
/// anything.
pub fn clean_document<O: ScanObserver>(source: PdfSource, observer: &mut O) -> Result<CleanOutcome> {
    let report = scan_with_observer(&source, observer);
    if report.is_clean() {
        return Ok(CleanOutcome::AlreadyClean { report });
    }

    let mut doc = source.into_document();

    // Delete back-to-front so earlier page numbers stay valid.
    let mut doomed = report.blank_pages.clone();
    doomed.sort_unstable_by(|a, b| b.cmp(a));
    for page in doomed {
        doc.delete_pages(&[page]);
    }

    doc.compress();
    let mut pdf = Vec::new();
    doc.save_to(&mut pdf).map_err(|e| Error::Save(e.to_string()))?;

    Ok(CleanOutcome::Cleaned { pdf, report })
}
