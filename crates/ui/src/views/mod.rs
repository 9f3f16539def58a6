mod exercise;
mod languages;
mod lesson;
mod lessons;
mod state;

pub use exercise::ExerciseView;
pub use languages::LanguagesView;
pub use lesson::LessonView;
pub use lessons::LessonsView;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
