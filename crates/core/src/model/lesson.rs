use serde::{Deserialize, Serialize};

//
// ─── LESSON TYPES ──────────────────────────────────────────────────────────────
//

/// List-view projection of a lesson. The full content is generated on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSummary {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// One word from a lesson: the word itself, its translation, and an optional
/// pronunciation hint. Used both for display and exercise generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub translation: String,
    pub pronunciation: Option<String>,
}

impl VocabEntry {
    /// Build an entry, treating a blank pronunciation as absent. The backend
    /// defaults the field to an empty string rather than omitting it.
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
        pronunciation: Option<String>,
    ) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            pronunciation: normalize_pronunciation(pronunciation),
        }
    }
}

/// A generated lesson: instructional text plus the vocabulary it introduces.
///
/// Lives only in memory for the duration of one lesson view and is replaced
/// wholesale on each fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub text: String,
    pub vocabulary: Vec<VocabEntry>,
}

impl Lesson {
    #[must_use]
    pub fn new(text: impl Into<String>, vocabulary: Vec<VocabEntry>) -> Self {
        Self {
            text: text.into(),
            vocabulary,
        }
    }

    #[must_use]
    pub fn has_vocabulary(&self) -> bool {
        !self.vocabulary.is_empty()
    }
}

/// Treat `None`, `""`, and whitespace-only pronunciations the same.
#[must_use]
pub(crate) fn normalize_pronunciation(pronunciation: Option<String>) -> Option<String> {
    pronunciation.filter(|p| !p.trim().is_empty())
}
