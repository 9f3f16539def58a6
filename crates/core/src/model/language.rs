use serde::{Deserialize, Serialize};

/// A selectable language: a backend identifier plus a display name.
///
/// Immutable once fetched; the backend owns the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub value: String,
    pub label: String,
}

impl Language {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
