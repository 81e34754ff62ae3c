//! PDF header sniffing.
//!
//! Inputs are checked for the `%PDF-` magic before a full parse is
//! attempted, so obviously wrong files fail fast with
//! [`Error::NotAPdf`](crate::Error::NotAPdf) instead of a parser error
//! deep inside the document loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// PDF magic bytes at the start of every document.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// How many header bytes are needed for sniffing.
const HEADER_LEN: usize = 8;

/// Check whether the data begins with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Check whether the file begins with a PDF header.
///
/// Only the first few bytes are read; this does not validate the rest of
/// the document.
pub fn is_pdf_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let mut file = File::open(path)?;
    let mut header = [0u8; HEADER_LEN];
    let n = file.read(&mut header)?;
    Ok(is_pdf_bytes(&header[..n]))
}

/// Return the version string declared in the header (e.g. `"1.7"`).
///
/// The declared version is advisory; it is reported as-is and never
/// validated against the document body.
pub fn sniff_version(data: &[u8]) -> Option<&str> {
    if !is_pdf_bytes(data) {
        return None;
    }
    let rest = &data[PDF_MAGIC.len()..];
    let end = rest
        .iter()
        .position(|b| !(b.is_ascii_digit() || *b == b'.'))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    std::str::from_utf8(&rest[..end]).ok()
}
