#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod exercise;
pub mod speech;

pub use api::{ApiClient, ApiConfig, LanguageMenu, LessonBackend};
pub use error::{ApiError, ExerciseError, SpeechError};
pub use exercise::{ExercisePhase, ExerciseSession, QuestionState};
pub use speech::{DEFAULT_FALLBACK_LOCALE, SpeechService};
