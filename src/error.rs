//! Error types for the docxvet library.

use std::io;
use thiserror::Error;

/// Result type alias for docxvet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reviewing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as a DOCX container.
    #[error("Unknown file format: not a valid .docx document")]
    UnknownFormat,

    /// Error parsing the document structure.
    #[error("DOCX parsing error: {0}")]
    DocxParse(String),

    /// Error packing the annotated document back into a byte buffer.
    #[error("DOCX packing error: {0}")]
    DocxWrite(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<docx_rs::ReaderError> for Error {
    fn from(err: docx_rs::ReaderError) -> Self {
        Error::DocxParse(err.to_string())
    }
}
