/*! Configuration

Process-wide reading limits, segmentation heuristics parameters and column names.

The field size limit is meant to be set once at startup (see [set_field_size_limit]), before any corpus is read.
!*/
use std::sync::OnceLock;

use crate::error::Error;

static FIELD_SIZE_LIMIT: OnceLock<usize> = OnceLock::new();

/// Sets the maximum field length (in bytes) accepted by readers.
///
/// Fails if the limit has already been set.
pub fn set_field_size_limit(limit: usize) -> Result<(), Error> {
    FIELD_SIZE_LIMIT
        .set(limit)
        .map_err(|_| Error::Custom("field size limit is already set".to_string()))
}

/// Maximum field length accepted by readers. Unbounded unless set by [set_field_size_limit].
pub fn field_size_limit() -> usize {
    FIELD_SIZE_LIMIT.get().copied().unwrap_or(usize::MAX)
}

/// Sentence boundary heuristic parameters.
///
/// A group is considered as finished when its last token is a terminator
/// and the token before is not a known abbreviation.
/// This is approximate: decimal points and abbreviations missing from the list are not handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    pub terminators: Vec<String>,
    pub abbreviations: Vec<String>,
}

impl SegmenterConfig {
    pub fn new(terminators: Vec<String>, abbreviations: Vec<String>) -> Self {
        Self {
            terminators,
            abbreviations,
        }
    }

    /// `true` if `last` ends a sentence given the `previous` token.
    pub fn ends_sentence(&self, previous: &str, last: &str) -> bool {
        self.terminators.iter().any(|t| t == last)
            && !self.abbreviations.iter().any(|a| a == previous)
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            terminators: [".", "!", "?"].iter().map(|s| s.to_string()).collect(),
            abbreviations: ["Mr", "Mrs", "Dr"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Names of the columns the processing functions rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub token: String,
    pub tag: String,
    pub misc: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            token: "TOKEN".to_string(),
            tag: "NE-COARSE-LIT".to_string(),
            misc: "MISC".to_string(),
        }
    }
}
