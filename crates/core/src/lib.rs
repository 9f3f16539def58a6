#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    AnswerOutcome, Exercise, ExerciseScore, Language, Lesson, LessonSummary, Question, ScoreError,
    VocabEntry,
};
