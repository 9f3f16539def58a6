mod exercise_vm;
mod lesson_vm;

pub use exercise_vm::{
    FeedbackTone, FeedbackVm, OptionMark, OptionVm, QuestionVm, map_exercise_questions, score_text,
};
pub use lesson_vm::{VocabRowVm, map_vocab_rows};
