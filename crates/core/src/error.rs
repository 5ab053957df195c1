//! Error types for icon extraction and deck restoration.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing presentations.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open, read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file format is not supported or could not be detected.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// Failed to parse the PPTX package structure.
    #[error("PPTX parsing error: {0}")]
    PptxParseError(String),

    /// A part referenced by the package is not present in the archive.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    XmlError(String),

    /// Failed to serialize a presentation.
    #[error("Write error: {0}")]
    WriteError(String),
}
