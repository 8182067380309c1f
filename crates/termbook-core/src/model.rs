//! Core data model types for termbook.
//!
//! Records mirror the rows of the flat files; the remaining types are derived
//! results handed to the presentation layer and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field separator used by every data file.
pub const SEPARATOR: char = ';';

/// Source tag written on records contributed through the submission flow.
pub const USER_SOURCE: &str = "user";

/// Source tag carried by pre-seeded records.
pub const DB_SOURCE: &str = "db";

/// A glossary entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    pub term: String,
    pub definition: String,
    /// Provenance tag (e.g. "user", "db").
    pub source: String,
}

impl TermRecord {
    /// Build a user-contributed record, replacing characters that would break
    /// row alignment.
    pub fn contributed(term: &str, definition: &str) -> Self {
        Self {
            term: sanitize_field(term),
            definition: sanitize_field(definition),
            source: USER_SOURCE.to_string(),
        }
    }

    /// The raw line this record is persisted as.
    pub fn to_line(&self) -> String {
        format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.term, self.definition, self.source
        )
    }
}

/// Replace separators with commas and line breaks with spaces.
pub fn sanitize_field(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            SEPARATOR => ',',
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

/// A term as listed to readers, numbered from 1 in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedTerm {
    pub index: usize,
    pub term: String,
    pub definition: String,
}

/// A text with its translation, numbered from 1 in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedText {
    pub index: usize,
    pub text: String,
    pub translation: String,
}

/// A quiz item: a prompt and the single answer accepted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position of the data line this question was read from.
    pub index: usize,
    pub prompt: String,
    pub answer: String,
}

/// One graded line of a quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub index: usize,
    pub prompt: String,
    pub submitted: String,
    pub expected: String,
    pub correct: bool,
}

/// The result of grading one quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub answers: Vec<GradedAnswer>,
    /// Percentage of correct answers, 0–100.
    pub score: f64,
}

impl QuizOutcome {
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }
}

/// Aggregate counts and definition lengths over all term records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Records tagged "db" or "user".
    pub terms_all: usize,
    /// Pre-seeded ("db") records.
    pub terms_own: usize,
    /// User-contributed records.
    pub terms_added: usize,
    /// Records whose tag matched neither; not part of `terms_all`.
    pub terms_other: usize,
    pub words_avg: f64,
    pub words_max: usize,
    pub words_min: usize,
}

/// A new glossary entry submitted by a reader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermSubmission {
    /// Display name of the contributor, echoed back on the outcome page.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub definition: String,
}

impl TermSubmission {
    /// Check blank fields. The definition is checked before the term.
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.definition.trim().is_empty() {
            return Err(Rejection::BlankDefinition);
        }
        if self.term.trim().is_empty() {
            return Err(Rejection::BlankTerm);
        }
        Ok(())
    }
}

/// Why a submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    BlankDefinition,
    BlankTerm,
}

impl Rejection {
    /// The form field the rejection refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Rejection::BlankDefinition => "definition",
            Rejection::BlankTerm => "term",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rejection::BlankDefinition => "definition must not be empty",
            Rejection::BlankTerm => "term must not be empty",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Added {
        name: Option<String>,
        record: TermRecord,
    },
    Rejected {
        name: Option<String>,
        reason: Rejection,
    },
}

impl SubmissionOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, SubmissionOutcome::Added { .. })
    }

    /// Message shown to the contributor.
    pub fn comment(&self) -> &'static str {
        match self {
            SubmissionOutcome::Added { .. } => "your term has been added",
            SubmissionOutcome::Rejected { reason, .. } => reason.message(),
        }
    }
}
