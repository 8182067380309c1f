//! Quiz loading and grading.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::error::{Result, StoreError};
use crate::model::{GradedAnswer, Question, QuizOutcome};
use crate::parser::{read_data_lines, split_fields};

/// Load quiz questions, skipping lines with fewer than two fields.
///
/// Fields past the second are ignored. A question's index is the 1-based
/// position of its data line, so skipped lines leave gaps.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let mut questions = Vec::new();
    for line in read_data_lines(path)? {
        let fields = split_fields(line.text.trim());
        let [prompt, answer, ..] = fields.as_slice() else {
            tracing::debug!(
                "skipping malformed quiz line {} in {}",
                line.number + 1,
                path.display()
            );
            continue;
        };
        questions.push(Question {
            index: line.number,
            prompt: prompt.to_string(),
            answer: answer.to_string(),
        });
    }
    Ok(questions)
}

/// Grade submitted answers against the questions.
///
/// Answers are looked up by question index; a missing answer counts as
/// empty. Submitted text is trimmed and compared case-insensitively.
pub fn grade(questions: &[Question], answers: &HashMap<usize, String>) -> Result<QuizOutcome> {
    if questions.is_empty() {
        return Err(StoreError::DivisionUndefined);
    }

    let graded: Vec<GradedAnswer> = questions
        .iter()
        .map(|q| {
            let submitted = answers
                .get(&q.index)
                .map(|a| a.trim())
                .unwrap_or_default()
                .to_string();
            let correct = submitted.to_lowercase() == q.answer.to_lowercase();
            GradedAnswer {
                index: q.index,
                prompt: q.prompt.clone(),
                submitted,
                expected: q.answer.clone(),
                correct,
            }
        })
        .collect();

    let correct = graded.iter().filter(|a| a.correct).count();
    let score = correct as f64 / graded.len() as f64 * 100.0;

    Ok(QuizOutcome {
        answers: graded,
        score,
    })
}

/// Build an answer map from `index=answer` pairs.
///
/// The answer may itself contain `=`; only the first one separates.
pub fn parse_answer_pairs<S: AsRef<str>>(pairs: &[S]) -> anyhow::Result<HashMap<usize, String>> {
    let mut answers = HashMap::new();
    for pair in pairs {
        let pair = pair.as_ref();
        let (index, answer) = pair
            .split_once('=')
            .with_context(|| format!("expected INDEX=ANSWER, got '{pair}'"))?;
        let index: usize = index
            .trim()
            .parse()
            .with_context(|| format!("invalid question index in '{pair}'"))?;
        answers.insert(index, answer.to_string());
    }
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capitals() -> Vec<Question> {
        vec![
            Question {
                index: 1,
                prompt: "Capital of France".into(),
                answer: "France".into(),
            },
            Question {
                index: 2,
                prompt: "Capital of Italy".into(),
                answer: "Italy".into(),
            },
        ]
    }

    #[test]
    fn grade_half_correct() {
        let answers = HashMap::from([(1, "france".to_string()), (2, "Spain".to_string())]);
        let outcome = grade(&capitals(), &answers).unwrap();

        assert!((outcome.score - 50.0).abs() < f64::EPSILON);
        assert!(outcome.answers[0].correct);
        assert!(!outcome.answers[1].correct);
        assert_eq!(outcome.answers[1].submitted, "Spain");
        assert_eq!(outcome.answers[1].expected, "Italy");
        assert_eq!(outcome.correct_count(), 1);
    }

    #[test]
    fn grade_trims_and_defaults_missing_answers() {
        let answers = HashMap::from([(2, "  ITALY \n".to_string())]);
        let outcome = grade(&capitals(), &answers).unwrap();

        assert_eq!(outcome.answers[0].submitted, "");
        assert!(!outcome.answers[0].correct);
        assert_eq!(outcome.answers[1].submitted, "ITALY");
        assert!(outcome.answers[1].correct);
        assert!((outcome.score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn grade_all_correct_is_100() {
        let answers = HashMap::from([(1, "France".to_string()), (2, "italy".to_string())]);
        let outcome = grade(&capitals(), &answers).unwrap();
        assert!((outcome.score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn grade_without_questions_is_undefined() {
        let err = grade(&[], &HashMap::new()).unwrap_err();
        assert!(matches!(err, StoreError::DivisionUndefined));
    }

    #[test]
    fn load_skips_lines_without_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tests.csv");
        std::fs::write(
            &path,
            "text;country\nBonjour;France;extra\nbroken line\n\nCiao;Italy\n",
        )
        .unwrap();

        let questions = load_questions(&path).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].index, 1);
        assert_eq!(questions[0].prompt, "Bonjour");
        assert_eq!(questions[0].answer, "France");
        assert_eq!(questions[1].index, 4);
        assert_eq!(questions[1].answer, "Italy");
    }

    #[test]
    fn load_trims_whole_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tests.csv");
        std::fs::write(&path, "text;country\n  Hola;Spain  \r\n").unwrap();
        let questions = load_questions(&path).unwrap();
        assert_eq!(questions[0].prompt, "Hola");
        assert_eq!(questions[0].answer, "Spain");
    }

    #[test]
    fn parse_pairs() {
        let answers = parse_answer_pairs(&["1=France", "3= a=b "]).unwrap();
        assert_eq!(answers[&1], "France");
        assert_eq!(answers[&3], " a=b ");
        assert!(parse_answer_pairs(&["France"]).is_err());
        assert!(parse_answer_pairs(&["x=France"]).is_err());
    }
}
