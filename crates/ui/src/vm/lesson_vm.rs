use lingo_core::model::VocabEntry;

/// Shown in the pronunciation column when a word has no hint, so the cell
/// never collapses to empty space.
const MISSING_PRONUNCIATION: &str = "-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabRowVm {
    pub word: String,
    pub translation: String,
    pub pronunciation_label: String,
}

#[must_use]
pub fn map_vocab_rows(vocabulary: &[VocabEntry]) -> Vec<VocabRowVm> {
    vocabulary
        .iter()
        .map(|entry| VocabRowVm {
            word: entry.word.clone(),
            translation: entry.translation.clone(),
            pronunciation_label: entry
                .pronunciation
                .clone()
                .unwrap_or_else(|| MISSING_PRONUNCIATION.to_string()),
        })
        .collect()
}
