//! Error types for the pricebook library.

use std::io;
use thiserror::Error;

/// Result type alias for pricebook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a price-list workbook.
///
/// These are the fatal tier: per-row malformed data never surfaces as an
/// error and is silently skipped during the scan instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading the ZIP archive (not an XLSX file, or corrupt).
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required workbook component is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// Invalid or malformed data in the workbook.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error serializing the catalog to JSON.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingComponent("xl/workbook.xml".to_string());
        assert_eq!(err.to_string(), "Missing component: xl/workbook.xml");

        let err = Error::ZipArchive("invalid Zip archive".to_string());
        assert_eq!(err.to_string(), "ZIP archive error: invalid Zip archive");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
