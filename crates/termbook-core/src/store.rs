//! Term record store.
//!
//! Terms live in a single `;`-delimited file. Every addition reads the whole
//! file, appends the new line, re-sorts the data lines, and rewrites the file.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::model::{NumberedTerm, SubmissionOutcome, TermRecord, TermSubmission};
use crate::parser::{parse_triple, read_data_lines};
use crate::traits::ResponseCache;

/// Flat-file store for glossary terms.
///
/// Writers going through the same `TermStore` are serialized, so concurrent
/// additions cannot drop each other's lines. Writers in other processes are
/// not coordinated.
#[derive(Debug)]
pub struct TermStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TermStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every term, numbered from 1 in file order.
    pub fn load_terms(&self) -> Result<Vec<NumberedTerm>> {
        read_data_lines(&self.path)?
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let [term, definition, _source] =
                    parse_triple(&self.path, line.number, &line.text)?;
                Ok(NumberedTerm {
                    index: i + 1,
                    term: term.to_string(),
                    definition: definition.to_string(),
                })
            })
            .collect()
    }

    /// Append a user-contributed term and rewrite the file in sorted order.
    pub fn add_term(&self, term: &str, definition: &str) -> Result<TermRecord> {
        let record = TermRecord::contributed(term, definition);

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let mut lines = content.lines();
        let Some(header) = lines.next() else {
            return Err(StoreError::MissingHeader {
                path: self.path.clone(),
            });
        };

        let new_line = record.to_line();
        let mut data: Vec<&str> = lines.filter(|l| !l.is_empty()).collect();
        data.push(new_line.as_str());
        // Lines compare without their terminator, so a line sorts before any
        // line it is a prefix of.
        data.sort_unstable();

        let mut out = String::with_capacity(content.len() + new_line.len() + 2);
        out.push_str(header);
        for line in &data {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');

        write_atomic(&self.path, &out)?;
        tracing::info!(
            "added term '{}' to {} ({} records)",
            record.term,
            self.path.display(),
            data.len()
        );
        Ok(record)
    }

    /// Validate a submission and, if it passes, add it and invalidate the cache.
    ///
    /// Blank fields come back as `SubmissionOutcome::Rejected`, not as errors.
    pub fn submit(
        &self,
        submission: &TermSubmission,
        cache: &dyn ResponseCache,
    ) -> Result<SubmissionOutcome> {
        if let Err(reason) = submission.validate() {
            tracing::debug!("rejected submission: {}", reason);
            return Ok(SubmissionOutcome::Rejected {
                name: submission.name.clone(),
                reason,
            });
        }

        let record = self.add_term(&submission.term, &submission.definition)?;

        // The term is on disk at this point; a failed invalidation only
        // leaves stale pages behind.
        if let Err(e) = cache.invalidate_all() {
            tracing::warn!("failed to invalidate response cache: {e:#}");
        }

        Ok(SubmissionOutcome::Added {
            name: submission.name.clone(),
            record,
        })
    }
}

/// Write to a sibling temp file, then rename over the target.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "terms".to_string());
    let tmp = path.with_file_name(format!(".{file_name}-{}.tmp", Uuid::new_v4()));

    std::fs::write(&tmp, content).map_err(|e| StoreError::io(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(StoreError::io(path, e));
    }
    Ok(())
}
