//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Http(reqwest::Error),
    Serde(serde_json::Error),
    /// Source file has no header line.
    MissingHeader,
    /// Requested column is not part of the header.
    MissingColumn(String),
    /// A data row does not have one field per column.
    ColumnMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A field exceeds [crate::config::field_size_limit].
    FieldTooLarge { line: usize, size: usize, limit: usize },
    /// An empty tag string, at the provided row.
    EmptyTag(usize),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Http(e) => write!(f, "search index error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::MissingHeader => write!(f, "missing header line"),
            Error::MissingColumn(c) => write!(f, "unknown column {:?}", c),
            Error::ColumnMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected {} fields, found {}",
                line, expected, found
            ),
            Error::FieldTooLarge { line, size, limit } => write!(
                f,
                "line {}: field of {} bytes exceeds limit of {}",
                line, size, limit
            ),
            Error::EmptyTag(row) => write!(f, "empty tag at row {}", row),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
