use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::lesson::normalize_pronunciation;

/// Prefix marking a placeholder option the backend could not fill in.
/// Such options must never be presented to the user.
pub const INVALID_OPTION_PREFIX: &str = "unknown_";

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One multiple-choice question: a word to translate, candidate options, and
/// the authoritative correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub word: String,
    pub pronunciation: Option<String>,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    #[must_use]
    pub fn new(
        id: u32,
        word: impl Into<String>,
        pronunciation: Option<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            word: word.into(),
            pronunciation: normalize_pronunciation(pronunciation),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    /// Options fit for display: blank and sentinel-invalid entries are
    /// dropped. The correct answer always survives, even when it happens to
    /// carry the sentinel prefix itself.
    #[must_use]
    pub fn valid_options(&self) -> Vec<&str> {
        self.options
            .iter()
            .map(String::as_str)
            .filter(|option| {
                if option.is_empty() {
                    return false;
                }
                *option == self.correct_answer || !option.starts_with(INVALID_OPTION_PREFIX)
            })
            .collect()
    }
}

/// A generated exercise: optional instructions plus the question set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub instructions: Option<String>,
    pub questions: Vec<Question>,
}

//
// ─── GRADING ───────────────────────────────────────────────────────────────────
//

/// Per-question grading result. `expected` carries the correct answer so the
/// feedback can show it without reaching back into the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { expected: String },
    Unanswered { expected: String },
}

impl AnswerOutcome {
    /// Grade one question by exact string match against the correct answer.
    #[must_use]
    pub fn check(selected: Option<&str>, correct: &str) -> Self {
        match selected {
            Some(answer) if answer == correct => Self::Correct,
            Some(_) => Self::Incorrect {
                expected: correct.to_string(),
            },
            None => Self::Unanswered {
                expected: correct.to_string(),
            },
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("correct count ({correct}) exceeds total ({total})")]
    CorrectExceedsTotal { correct: usize, total: usize },
}

/// Aggregate score for one graded question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseScore {
    correct: usize,
    total: usize,
}

impl ExerciseScore {
    /// # Errors
    ///
    /// Returns `ScoreError::CorrectExceedsTotal` if the counts do not align.
    pub fn new(correct: usize, total: usize) -> Result<Self, ScoreError> {
        if correct > total {
            return Err(ScoreError::CorrectExceedsTotal { correct, total });
        }
        Ok(Self { correct, total })
    }

    /// Tally a slice of per-question outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: &[AnswerOutcome]) -> Self {
        Self {
            correct: outcomes.iter().filter(|o| o.is_correct()).count(),
            total: outcomes.len(),
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Score as an integer percentage with standard rounding. Zero questions
    /// score zero rather than dividing by zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct as f64 * 100.0 / self.total as f64).round() as u32
    }
}
