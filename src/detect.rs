//! DOCX format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local-file-header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Marker every OOXML package must contain near the start of the archive.
const CONTENT_TYPES_PART: &[u8] = b"[Content_Types].xml";

/// How many bytes of the header to scan for the content-types part name.
/// Writers that don't put `[Content_Types].xml` first still land it within
/// the first few entries.
const HEADER_SCAN_LEN: usize = 4096;

/// Detect whether bytes look like a DOCX (OOXML) container.
///
/// # Arguments
/// * `data` - Byte slice containing at least the start of the file
///
/// # Returns
/// * `Ok(())` if the data starts with a plausible DOCX header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<()> {
    if !data.starts_with(ZIP_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    // Every OOXML package carries [Content_Types].xml, normally as the
    // first archive entry, so its name shows up near the start of the
    // buffer. A plain ZIP without it is not a docx.
    let scan = &data[..data.len().min(HEADER_SCAN_LEN)];
    if !contains_subslice(scan, CONTENT_TYPES_PART) {
        return Err(Error::UnknownFormat);
    }

    Ok(())
}

/// Detect DOCX format from a file path.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = vec![0u8; HEADER_SCAN_LEN];
    let n = reader.read(&mut header)?;
    detect_format_from_bytes(&header[..n])
}

/// Check if bytes represent a DOCX container.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Check if a file is a DOCX container.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
