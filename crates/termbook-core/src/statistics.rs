//! Aggregate statistics over the term file.
//!
//! A snapshot is recomputed from disk on every call; nothing is cached here.

use std::path::Path;

use crate::error::{Result, StoreError};
use crate::model::{StatsSnapshot, DB_SOURCE, USER_SOURCE};
use crate::parser::{parse_triple, read_data_lines};

/// Provenance bucket a record falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceClass {
    User,
    Db,
    Other,
}

/// Classify a source tag by substring, checking "user" before "db".
pub fn classify_source(tag: &str) -> SourceClass {
    if tag.contains(USER_SOURCE) {
        SourceClass::User
    } else if tag.contains(DB_SOURCE) {
        SourceClass::Db
    } else {
        SourceClass::Other
    }
}

/// Number of whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Compute counts and definition word statistics for the term file at `path`.
pub fn compute_stats(path: &Path) -> Result<StatsSnapshot> {
    let lines = read_data_lines(path)?;
    if lines.is_empty() {
        return Err(StoreError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    let mut user = 0usize;
    let mut db = 0usize;
    let mut other = 0usize;
    let mut lengths = Vec::with_capacity(lines.len());

    for line in &lines {
        let [term, definition, source] = parse_triple(path, line.number, &line.text)?;
        lengths.push(word_count(definition));
        match classify_source(source) {
            SourceClass::User => user += 1,
            SourceClass::Db => db += 1,
            SourceClass::Other => {
                tracing::warn!("term '{term}' has unrecognized source tag '{source}'");
                other += 1;
            }
        }
    }

    let total_words: usize = lengths.iter().sum();
    let words_max = lengths.iter().copied().max().unwrap_or(0);
    let words_min = lengths.iter().copied().min().unwrap_or(0);

    Ok(StatsSnapshot {
        terms_all: db + user,
        terms_own: db,
        terms_added: user,
        terms_other: other,
        words_avg: total_words as f64 / lengths.len() as f64,
        words_max,
        words_min,
    })
}
