//! Data access error types.
//!
//! Every read or write against the flat files reports failures through
//! [`StoreError`], so the presentation layer can tell a malformed file apart
//! from an unreadable one without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the term store, statistics aggregator, and quiz grader.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A data line did not split into the expected number of fields.
    #[error("{}:{line}: expected {expected} fields, found {found}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file has no header line to preserve on rewrite.
    #[error("{} has no header line", .path.display())]
    MissingHeader { path: PathBuf },

    /// Statistics were requested over a file with no data lines.
    #[error("no records in {}", .path.display())]
    EmptyDataset { path: PathBuf },

    /// A quiz score was requested over zero questions.
    #[error("cannot score a quiz with no questions")]
    DivisionUndefined,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the failure comes from file contents rather than the
    /// filesystem.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            StoreError::MalformedRecord { .. }
                | StoreError::MissingHeader { .. }
                | StoreError::EmptyDataset { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_message_names_location() {
        let err = StoreError::MalformedRecord {
            path: PathBuf::from("data/terms.csv"),
            line: 4,
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "data/terms.csv:4: expected 3 fields, found 2"
        );
        assert!(err.is_data_error());
    }

    #[test]
    fn io_is_not_a_data_error() {
        let err = StoreError::io(
            "missing.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(!err.is_data_error());
        assert!(err.to_string().contains("missing.csv"));
    }
}
