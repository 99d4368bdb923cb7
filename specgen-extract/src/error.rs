//! Error types for extraction
//!
//! The taxonomy is deliberate: retrieval and I/O failures propagate
//! unmodified, a missing table or heading is a structural failure naming
//! the page and the expectation, and an extraction that parses fine but
//! yields zero records is its own failure class — a silently empty
//! category is worse than a crash. There is no retry anywhere.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ExtractError {
    /// Network failure from the retrieval collaborator.
    Http(reqwest::Error),
    /// Filesystem failure (cache or aggregate persistence).
    Io(io::Error),
    /// Aggregate serialization failure.
    Serialize(serde_json::Error),
    /// An expected table, heading or list is missing from a source page.
    MissingStructure { page: String, what: String },
    /// Extraction completed but produced zero usable records.
    EmptyCategory { category: &'static str },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Http(err) => write!(f, "Retrieval failed: {err}"),
            ExtractError::Io(err) => write!(f, "IO error: {err}"),
            ExtractError::Serialize(err) => write!(f, "Serialization error: {err}"),
            ExtractError::MissingStructure { page, what } => {
                write!(f, "{page}: expected {what}, none found")
            }
            ExtractError::EmptyCategory { category } => {
                write!(f, "Extraction yielded zero {category} records")
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Http(err) => Some(err),
            ExtractError::Io(err) => Some(err),
            ExtractError::Serialize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        ExtractError::Http(err)
    }
}

impl From<io::Error> for ExtractError {
    fn from(err: io::Error) -> Self {
        ExtractError::Io(err)
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::Serialize(err)
    }
}

impl ExtractError {
    /// Structural failures mean the page loaded but lacked the expected
    /// shape; used to tell them apart from retrieval failures where one
    /// sub-extraction may proceed without the other.
    pub fn is_structural(&self) -> bool {
        matches!(self, ExtractError::MissingStructure { .. })
    }
}
