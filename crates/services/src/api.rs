use std::env;

use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use lingo_core::model::{Exercise, Language, Lesson, LessonSummary, Question, VocabEntry};

use crate::error::ApiError;

/// Fallback label for the start control when the backend omits one.
const DEFAULT_START_LABEL: &str = "Start";

/// Contents of the language picker screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageMenu {
    pub languages: Vec<Language>,
    pub instructions: String,
    pub start_label: String,
}

/// The backend collaborator boundary: everything the UI needs from the
/// lesson service, behind a trait so views can be exercised with a stub.
#[async_trait]
pub trait LessonBackend: Send + Sync {
    /// Fetch the selectable languages and the picker instructions.
    async fn languages(&self) -> Result<LanguageMenu, ApiError>;

    /// Fetch the available lesson topics.
    async fn lessons(&self) -> Result<Vec<LessonSummary>, ApiError>;

    /// Generate a lesson for a language/topic pair.
    async fn lesson(&self, language: &str, topic: &str) -> Result<Lesson, ApiError>;

    /// Generate a multiple-choice exercise from a lesson's vocabulary.
    async fn exercise(
        &self,
        language: &str,
        vocabulary: &[VocabEntry],
    ) -> Result<Exercise, ApiError>;

    /// Synthesize speech for a single word. Returns decoded WAV bytes.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, ApiError>;
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read the base URL from `LINGO_API_URL`, defaulting to the local
    /// development backend.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("LINGO_API_URL").unwrap_or_else(|_| "http://localhost:8000".into());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// HTTP client for the lesson backend. One attempt per call; failures are
/// surfaced to the caller, never retried here.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl LessonBackend for ApiClient {
    async fn languages(&self) -> Result<LanguageMenu, ApiError> {
        let body: LanguagesResponse = self.get_json("/api/languages", &[]).await?;
        Ok(body.into_menu())
    }

    async fn lessons(&self) -> Result<Vec<LessonSummary>, ApiError> {
        let body: ListResponse = self.get_json("/api/list", &[]).await?;
        Ok(body.lessons)
    }

    async fn lesson(&self, language: &str, topic: &str) -> Result<Lesson, ApiError> {
        let body: LessonResponse = self
            .get_json("/api/lesson", &[("language", language), ("topic", topic)])
            .await?;
        Ok(body.into_lesson())
    }

    async fn exercise(
        &self,
        language: &str,
        vocabulary: &[VocabEntry],
    ) -> Result<Exercise, ApiError> {
        let request = ExerciseRequest {
            language,
            vocabulary: vocabulary.iter().map(VocabItem::from_entry).collect(),
        };
        let body: ExerciseResponse = self.post_json("/api/exercise", &request).await?;
        body.into_exercise()
    }

    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, ApiError> {
        let request = TtsRequest { text, language };
        let body: TtsResponse = self.post_json("/api/tts", &request).await?;
        decode_tts_audio(body)
    }
}

//
// ─── WIRE SHAPES ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    #[serde(default)]
    languages: Vec<Language>,
    #[serde(default)]
    instructions: String,
    #[serde(default)]
    button_text: Option<String>,
}

impl LanguagesResponse {
    fn into_menu(self) -> LanguageMenu {
        LanguageMenu {
            languages: self.languages,
            instructions: self.instructions,
            start_label: self
                .button_text
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_START_LABEL.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    lessons: Vec<LessonSummary>,
}

#[derive(Debug, Deserialize)]
struct LessonResponse {
    #[serde(default)]
    lesson: String,
    #[serde(default)]
    vocabulary: Vec<VocabItemOwned>,
}

impl LessonResponse {
    fn into_lesson(self) -> Lesson {
        let vocabulary = self
            .vocabulary
            .into_iter()
            .map(|item| VocabEntry::new(item.word, item.translation, item.pronunciation))
            .collect();
        Lesson::new(self.lesson, vocabulary)
    }
}

#[derive(Debug, Deserialize)]
struct VocabItemOwned {
    word: String,
    translation: String,
    #[serde(default)]
    pronunciation: Option<String>,
}

#[derive(Debug, Serialize)]
struct ExerciseRequest<'a> {
    language: &'a str,
    vocabulary: Vec<VocabItem<'a>>,
}

/// Request-side vocabulary item. The backend models pronunciation as a plain
/// string defaulting to empty, so `None` is sent as `""`.
#[derive(Debug, Serialize)]
struct VocabItem<'a> {
    word: &'a str,
    translation: &'a str,
    pronunciation: &'a str,
}

impl<'a> VocabItem<'a> {
    fn from_entry(entry: &'a VocabEntry) -> Self {
        Self {
            word: &entry.word,
            translation: &entry.translation,
            pronunciation: entry.pronunciation.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExerciseResponse {
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    questions: Vec<QuestionItem>,
    #[serde(default)]
    error: Option<String>,
}

impl ExerciseResponse {
    fn into_exercise(self) -> Result<Exercise, ApiError> {
        if let Some(error) = self.error {
            return Err(ApiError::Backend(error));
        }
        let questions = self
            .questions
            .into_iter()
            .map(|item| {
                Question::new(
                    item.id,
                    item.word,
                    item.pronunciation,
                    item.options,
                    item.correct_answer,
                )
            })
            .collect();
        Ok(Exercise {
            instructions: self.instructions,
            questions,
        })
    }
}

#[derive(Debug, Deserialize)]
struct QuestionItem {
    id: u32,
    word: String,
    #[serde(default)]
    pronunciation: Option<String>,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: String,
}

#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct TtsResponse {
    #[serde(default)]
    audio: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Unpack a TTS response: an explicit `error` field wins, then the base64
/// payload is decoded to raw WAV bytes.
fn decode_tts_audio(response: TtsResponse) -> Result<Vec<u8>, ApiError> {
    if let Some(error) = response.error {
        return Err(ApiError::Backend(error));
    }
    match response.audio {
        Some(audio) if !audio.is_empty() => {
            Ok(base64::engine::general_purpose::STANDARD.decode(audio)?)
        }
        _ => Err(ApiError::EmptyAudio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn languages_response_maps_button_text() {
        let body: LanguagesResponse = serde_json::from_value(json!({
            "languages": [
                {"label": "Kabyle", "value": "Kabyle"},
                {"label": "Tarifit", "value": "Tarifit"},
            ],
            "button_text": "Start",
            "instructions": "Select a language and press Start to continue."
        }))
        .unwrap();

        let menu = body.into_menu();
        assert_eq!(menu.languages.len(), 2);
        assert_eq!(menu.languages[0].label, "Kabyle");
        assert_eq!(menu.start_label, "Start");
        assert!(menu.instructions.contains("Select a language"));
    }

    #[test]
    fn languages_response_defaults_missing_fields() {
        let body: LanguagesResponse = serde_json::from_value(json!({})).unwrap();
        let menu = body.into_menu();
        assert!(menu.languages.is_empty());
        assert_eq!(menu.start_label, "Start");
    }

    #[test]
    fn lesson_response_normalizes_blank_pronunciation() {
        let body: LessonResponse = serde_json::from_value(json!({
            "lesson": "Azul means hello.",
            "vocabulary": [
                {"word": "azul", "translation": "hello", "pronunciation": ""},
                {"word": "tanemmirt", "translation": "thank you", "pronunciation": "ta-nem-MIRT"},
                {"word": "ula", "translation": "no"},
            ]
        }))
        .unwrap();

        let lesson = body.into_lesson();
        assert_eq!(lesson.text, "Azul means hello.");
        assert_eq!(lesson.vocabulary[0].pronunciation, None);
        assert_eq!(
            lesson.vocabulary[1].pronunciation.as_deref(),
            Some("ta-nem-MIRT")
        );
        assert_eq!(lesson.vocabulary[2].pronunciation, None);
    }

    #[test]
    fn exercise_response_surfaces_backend_error() {
        let body: ExerciseResponse = serde_json::from_value(json!({
            "error": "No vocabulary provided for exercise generation"
        }))
        .unwrap();

        let err = body.into_exercise().unwrap_err();
        assert!(matches!(err, ApiError::Backend(message) if message.contains("No vocabulary")));
    }

    #[test]
    fn exercise_response_parses_questions() {
        let body: ExerciseResponse = serde_json::from_value(json!({
            "instructions": "Match each Kabyle word with its correct English translation",
            "questions": [{
                "id": 1,
                "word": "azul",
                "pronunciation": "",
                "options": ["hello", "goodbye", "thanks"],
                "correct_answer": "hello"
            }]
        }))
        .unwrap();

        let exercise = body.into_exercise().unwrap();
        assert_eq!(exercise.questions.len(), 1);
        assert_eq!(exercise.questions[0].pronunciation, None);
        assert_eq!(exercise.questions[0].correct_answer, "hello");
    }

    #[test]
    fn tts_error_field_wins_over_audio() {
        let response = TtsResponse {
            audio: Some("AAAA".to_string()),
            error: Some("TTS model not available".to_string()),
        };
        let err = decode_tts_audio(response).unwrap_err();
        assert!(matches!(err, ApiError::Backend(_)));
    }

    #[test]
    fn tts_audio_decodes_base64() {
        let response = TtsResponse {
            audio: Some(base64::engine::general_purpose::STANDARD.encode(b"RIFFdata")),
            error: None,
        };
        assert_eq!(decode_tts_audio(response).unwrap(), b"RIFFdata");
    }

    #[test]
    fn tts_missing_audio_is_an_error() {
        let response = TtsResponse {
            audio: None,
            error: None,
        };
        assert!(matches!(
            decode_tts_audio(response).unwrap_err(),
            ApiError::EmptyAudio
        ));
    }

    #[test]
    fn tts_invalid_base64_is_an_error() {
        let response = TtsResponse {
            audio: Some("not base64!!".to_string()),
            error: None,
        };
        assert!(matches!(
            decode_tts_audio(response).unwrap_err(),
            ApiError::AudioDecode(_)
        ));
    }

    #[test]
    fn exercise_request_sends_blank_pronunciation_for_none() {
        let vocabulary = vec![VocabEntry::new("azul", "hello", None)];
        let request = ExerciseRequest {
            language: "Kabyle",
            vocabulary: vocabulary.iter().map(VocabItem::from_entry).collect(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["vocabulary"][0]["pronunciation"], "");
        assert_eq!(value["language"], "Kabyle");
    }

    #[test]
    fn client_strips_trailing_slash() {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
        });
        assert_eq!(client.url("/api/list"), "http://localhost:8000/api/list");
    }
}
