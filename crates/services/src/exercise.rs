use rand::rng;
use rand::seq::SliceRandom;

use lingo_core::model::{AnswerOutcome, Exercise, ExerciseScore, Question};

use crate::error::ExerciseError;

/// Fallback instructions when the backend omits them.
const DEFAULT_INSTRUCTIONS: &str = "Match each word with its correct translation.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExercisePhase {
    /// Questions are interactive: selections may still change.
    Ready,
    /// Answers have been checked; all controls are inert until retry.
    Graded,
}

//
// ─── QUESTION STATE ────────────────────────────────────────────────────────────
//

/// Render state for one question: the shuffled presentation order, the
/// current selection, and (after grading) the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionState {
    question: Question,
    presented: Vec<String>,
    selected: Option<String>,
    outcome: Option<AnswerOutcome>,
}

impl QuestionState {
    fn enter(question: Question) -> Self {
        let presented = shuffled_options(&question);
        Self {
            question,
            presented,
            selected: None,
            outcome: None,
        }
    }

    /// Fresh shuffle, no selection, no feedback. Used on retry.
    fn reset(&mut self) {
        self.presented = shuffled_options(&self.question);
        self.selected = None;
        self.outcome = None;
    }

    fn grade(&mut self) -> AnswerOutcome {
        let outcome = AnswerOutcome::check(self.selected.as_deref(), &self.question.correct_answer);
        self.outcome = Some(outcome.clone());
        outcome
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.question.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.question.word
    }

    #[must_use]
    pub fn pronunciation(&self) -> Option<&str> {
        self.question.pronunciation.as_deref()
    }

    /// Options in presentation order: filtered of sentinel entries, shuffled
    /// on entry and on every retry.
    #[must_use]
    pub fn presented_options(&self) -> &[String] {
        &self.presented
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&AnswerOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.question.correct_answer
    }
}

fn shuffled_options(question: &Question) -> Vec<String> {
    let mut options: Vec<String> = question
        .valid_options()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    options.shuffle(&mut rng());
    options
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state machine for one exercise attempt.
///
/// `Ready -> Graded` on an explicit grade request; `Graded -> Ready` on
/// retry, which reshuffles options and discards all selections and feedback.
/// The original question set is retained across retries.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSession {
    instructions: String,
    questions: Vec<QuestionState>,
    phase: ExercisePhase,
    score: Option<ExerciseScore>,
}

impl ExerciseSession {
    /// Enter `Ready` from a generated exercise.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::Empty` if the exercise has no questions.
    pub fn new(exercise: Exercise) -> Result<Self, ExerciseError> {
        if exercise.questions.is_empty() {
            return Err(ExerciseError::Empty);
        }

        let instructions = exercise
            .instructions
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string());

        let questions = exercise
            .questions
            .into_iter()
            .map(QuestionState::enter)
            .collect();

        Ok(Self {
            instructions,
            questions,
            phase: ExercisePhase::Ready,
            score: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> ExercisePhase {
        self.phase
    }

    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.phase == ExercisePhase::Graded
    }

    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionState] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Record an answer for one question, overwriting any prior selection.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::AlreadyGraded` once controls are inert,
    /// `ExerciseError::UnknownQuestion` for an out-of-range index, and
    /// `ExerciseError::UnknownOption` if the option is not presented.
    pub fn select(&mut self, index: usize, option: &str) -> Result<(), ExerciseError> {
        if self.is_graded() {
            return Err(ExerciseError::AlreadyGraded);
        }
        let state = self
            .questions
            .get_mut(index)
            .ok_or(ExerciseError::UnknownQuestion(index))?;
        if !state.presented.iter().any(|candidate| candidate == option) {
            return Err(ExerciseError::UnknownOption(option.to_string()));
        }
        state.selected = Some(option.to_string());
        Ok(())
    }

    /// Grade every question and move to `Graded`. One-shot: grading again
    /// without a retry is rejected.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::AlreadyGraded` on a second grade request.
    pub fn grade(&mut self) -> Result<ExerciseScore, ExerciseError> {
        if self.is_graded() {
            return Err(ExerciseError::AlreadyGraded);
        }

        let outcomes: Vec<AnswerOutcome> = self
            .questions
            .iter_mut()
            .map(QuestionState::grade)
            .collect();

        let score = ExerciseScore::from_outcomes(&outcomes);
        self.phase = ExercisePhase::Graded;
        self.score = Some(score);
        Ok(score)
    }

    /// Aggregate score of the last grading, if any.
    #[must_use]
    pub fn score(&self) -> Option<ExerciseScore> {
        self.score
    }

    /// Re-enter `Ready` from the retained question set: fresh shuffle,
    /// selections and feedback cleared, grading history discarded.
    pub fn retry(&mut self) {
        for state in &mut self.questions {
            state.reset();
        }
        self.phase = ExercisePhase::Ready;
        self.score = None;
    }
}
