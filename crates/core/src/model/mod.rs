mod exercise;
mod language;
mod lesson;

pub use exercise::{
    AnswerOutcome, Exercise, ExerciseScore, INVALID_OPTION_PREFIX, Question, ScoreError,
};
pub use language::Language;
pub use lesson::{Lesson, LessonSummary, VocabEntry};
