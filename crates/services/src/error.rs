//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the backend HTTP client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("backend request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("backend reported an error: {0}")]
    Backend(String),
    #[error("backend returned no audio payload")]
    EmptyAudio,
    #[error("could not decode audio payload: {0}")]
    AudioDecode(#[from] base64::DecodeError),
}

/// Errors emitted by `ExerciseSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("no questions available for this exercise")]
    Empty,
    #[error("exercise already graded")]
    AlreadyGraded,
    #[error("no question at index {0}")]
    UnknownQuestion(usize),
    #[error("option is not presented for this question: {0}")]
    UnknownOption(String),
}

/// Errors emitted along the speech playback path. These never surface as view
/// errors; they only decide whether the fallback engine takes over.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpeechError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Output(#[from] rodio::StreamError),
    #[error(transparent)]
    Play(#[from] rodio::PlayError),
    #[error(transparent)]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error(transparent)]
    Engine(#[from] tts::Error),
}
