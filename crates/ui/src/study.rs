use lingo_core::model::{Language, Lesson, VocabEntry};

/// Cross-screen study state: the chosen language, the chosen topic, and the
/// most recently fetched lesson.
///
/// Every transition builds a fresh value; views replace the whole struct in
/// the shared signal rather than mutating fields in place, so the state is
/// always consistent with the last completed fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudySession {
    language: Option<Language>,
    topic: Option<String>,
    lesson: Option<Lesson>,
}

impl StudySession {
    /// Start over with a chosen language. Topic and lesson are cleared.
    #[must_use]
    pub fn with_language(language: Language) -> Self {
        Self {
            language: Some(language),
            topic: None,
            lesson: None,
        }
    }

    /// Same language, new topic. Any previously fetched lesson is stale and
    /// dropped.
    #[must_use]
    pub fn with_topic(&self, topic: impl Into<String>) -> Self {
        Self {
            language: self.language.clone(),
            topic: Some(topic.into()),
            lesson: None,
        }
    }

    /// Replace the lesson wholesale after a completed fetch.
    #[must_use]
    pub fn with_lesson(&self, lesson: Lesson) -> Self {
        Self {
            language: self.language.clone(),
            topic: self.topic.clone(),
            lesson: Some(lesson),
        }
    }

    /// Back to the language picker: nothing carries over.
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    #[must_use]
    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    /// Vocabulary of the current lesson, or an empty slice before any fetch.
    #[must_use]
    pub fn vocabulary(&self) -> &[VocabEntry] {
        self.lesson
            .as_ref()
            .map_or(&[], |lesson| lesson.vocabulary.as_slice())
    }
}
