// File: src/core/filter.rs
use crate::core::types::{DictionaryResource, Phase, SyllableEntry};
use std::collections::HashSet;
use tracing::{info, warn};

/// Default number of removed entries kept for the report.
pub const REMOVED_PREVIEW_LIMIT: usize = 10;

/// Dictionary words normalized to lowercase for membership tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionarySet {
    words: HashSet<String>,
}

impl DictionarySet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for DictionarySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

/// What the filter did. Reporting only; the resource never depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub original: usize,
    pub kept: usize,
    pub removed: usize,
    /// The first removed entries, with their frequency before removal.
    pub removed_preview: Vec<SyllableEntry>,
    /// False when the resource had no syllable list and was returned as is.
    pub applied: bool,
}

/// Keeps only syllables that are dictionary words (case-insensitive), in their
/// existing order, and re-derives the metadata counters.
///
/// A resource without a syllable list is returned unmodified.
pub fn filter_syllables_by_dictionary(
    mut resource: DictionaryResource,
    dictionary: &DictionarySet,
    preview_limit: usize,
) -> (DictionaryResource, FilterReport) {
    let Some(syllables) = resource.syllables.take() else {
        warn!("No syllables found in resource; leaving it unchanged");
        return (resource, FilterReport::default());
    };

    let original = syllables.len();
    let (kept, removed): (Vec<SyllableEntry>, Vec<SyllableEntry>) =
        syllables.into_iter().partition(|entry| dictionary.contains(&entry.syllable));

    let report = FilterReport {
        original,
        kept: kept.len(),
        removed: removed.len(),
        removed_preview: removed.into_iter().take(preview_limit).collect(),
        applied: true,
    };

    resource.syllables = Some(kept);
    resource.refresh_counts();
    resource.metadata.phase = Phase::DictionaryFiltered;

    info!("Original syllables: {}", report.original);
    info!("Filtered syllables: {}", report.kept);
    info!("Removed syllables: {}", report.removed);
    for entry in &report.removed_preview {
        info!("  - {} (frequency: {})", entry.syllable, entry.frequency);
    }
    (resource, report)
}
