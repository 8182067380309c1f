//! Delimited flat-file parsing.
//!
//! Every data file is one header line followed by `;`-separated data lines,
//! with no quoting or escaping.

use std::path::Path;

use crate::error::{Result, StoreError};
use crate::model::SEPARATOR;

/// A data line together with its 1-based position after the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLine {
    pub number: usize,
    pub text: String,
}

/// Read a file and return its data lines, dropping the header.
pub fn read_data_lines(path: &Path) -> Result<Vec<DataLine>> {
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let lines = data_lines(&content);
    tracing::debug!("read {} data lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split file contents into data lines, dropping the header.
pub fn data_lines(content: &str) -> Vec<DataLine> {
    content
        .lines()
        .skip(1)
        .enumerate()
        .map(|(i, text)| DataLine {
            number: i + 1,
            text: text.to_string(),
        })
        .collect()
}

/// Split a raw line on the separator.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(SEPARATOR).collect()
}

/// Split a line into exactly three fields.
///
/// `line_no` is the 1-based data line number, reported in the error as the
/// file line (header included).
pub fn parse_triple<'a>(path: &Path, line_no: usize, line: &'a str) -> Result<[&'a str; 3]> {
    let fields = split_fields(line);
    match fields.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(StoreError::MalformedRecord {
            path: path.to_path_buf(),
            line: line_no + 1,
            expected: 3,
            found: fields.len(),
        }),
    }
}
