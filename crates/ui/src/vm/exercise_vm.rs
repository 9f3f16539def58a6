use lingo_core::model::{AnswerOutcome, ExerciseScore};
use services::{ExerciseSession, QuestionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    /// Nothing to show (not graded, or a neutral option).
    Plain,
    /// This is the correct answer; marked after grading.
    Correct,
    /// The user picked this option and it was wrong.
    WrongChoice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub mark: OptionMark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub tone: FeedbackTone,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: u32,
    pub word: String,
    pub pronunciation: Option<String>,
    /// Controls are inert once the set is graded.
    pub inert: bool,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
}

/// Map the session into display rows: one `QuestionVm` per question, with
/// per-option selection/mark state and post-grading feedback.
#[must_use]
pub fn map_exercise_questions(session: &ExerciseSession) -> Vec<QuestionVm> {
    let inert = session.is_graded();
    session
        .questions()
        .iter()
        .map(|state| map_question(state, inert))
        .collect()
}

fn map_question(state: &QuestionState, inert: bool) -> QuestionVm {
    let options = state
        .presented_options()
        .iter()
        .map(|option| {
            let selected = state.selected() == Some(option.as_str());
            let mark = if !inert {
                OptionMark::Plain
            } else if option == state.correct_answer() {
                OptionMark::Correct
            } else if selected {
                OptionMark::WrongChoice
            } else {
                OptionMark::Plain
            };
            OptionVm {
                value: option.clone(),
                label: match mark {
                    OptionMark::Plain => option.clone(),
                    OptionMark::Correct => format!("\u{2713} {option}"),
                    OptionMark::WrongChoice => format!("\u{2717} {option}"),
                },
                selected,
                mark,
            }
        })
        .collect();

    QuestionVm {
        id: state.id(),
        word: state.word().to_string(),
        pronunciation: state.pronunciation().map(ToString::to_string),
        inert,
        options,
        feedback: state.outcome().map(feedback_for),
    }
}

fn feedback_for(outcome: &AnswerOutcome) -> FeedbackVm {
    match outcome {
        AnswerOutcome::Correct => FeedbackVm {
            tone: FeedbackTone::Correct,
            text: "\u{2713} Correct!".to_string(),
        },
        AnswerOutcome::Incorrect { expected } => FeedbackVm {
            tone: FeedbackTone::Incorrect,
            text: format!("\u{2717} Incorrect. The correct answer is: {expected}"),
        },
        AnswerOutcome::Unanswered { expected } => FeedbackVm {
            tone: FeedbackTone::Incorrect,
            text: format!("\u{2212} No answer selected. The correct answer is: {expected}"),
        },
    }
}

/// Score line shown after grading: raw fraction plus rounded percentage.
#[must_use]
pub fn score_text(score: ExerciseScore) -> String {
    format!(
        "You got {} out of {} correct! ({}%)",
        score.correct(),
        score.total(),
        score.percent()
    )
}
