//! Blank-page classification.
//!
//! A page is blank if and only if its extracted text, after trimming
//! surrounding whitespace, is empty. Pages carrying only images or vector
//! drawings extract no text and therefore classify as blank. A page whose
//! text cannot be extracted at all is kept (fail-open) rather than removed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::source::TextSource;

/// Outcome of classifying a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No extractable text after trimming whitespace; the page is removed.
    Blank,
    /// The page carries non-whitespace text; the page is kept.
    Text,
    /// Text extraction failed; the page is kept and a warning is recorded.
    ExtractFailed,
}

impl Verdict {
    /// Whether the page is removed from the output document.
    pub fn is_blank(self) -> bool {
        matches!(self, Verdict::Blank)
    }

    /// Whether the page appears in the output document.
    pub fn is_kept(self) -> bool {
        !self.is_blank()
    }
}

/// A non-fatal problem encountered while scanning a document.
///
/// Warnings never abort the scan; the affected page is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWarning {
    /// 1-based page number.
    pub page: u32,
    /// Human-readable description of the failure.
    pub message: String,
}

impl fmt::Display for PageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}: {}", self.page, self.message)
    }
}

/// The blank rule: trimmed-empty text means blank.
pub fn is_blank_text(text: &str) -> bool {
    text.trim().is_empty()
}

/// Classify the text of one page, treating extraction failure as kept.
pub fn classify_text(extracted: Result<String>) -> (Verdict, Option<String>) {
    match extracted {
        Ok(text) if is_blank_text(&text) => (Verdict::Blank, None),
        Ok(_) => (Verdict::Text, None),
        Err(err) => (Verdict::ExtractFailed, Some(err.to_string())),
    }
}

/// Classify one page of a source.
pub fn classify_page<S: TextSource + ?Sized>(source: &S, page: u32) -> (Verdict, Option<PageWarning>) {
    let (verdict, failure) = classify_text(source.page_text(page));
    let warning = failure.map(|message| {
        log::warn!("text extraction failed on page {page}: {message}");
        PageWarning { page, message }
    });
    (verdict, warning)
}
