// File: src/core/builder.rs
use crate::core::frequency::FrequencyTables;
use crate::core::types::{DictionaryResource, Metadata, Phase, SyllableEntry, WordEntry};
use tracing::info;

/// Phase 1: one zero-frequency entry per input word, in input order, with an
/// empty syllable list.
pub fn build_skeleton<S: AsRef<str>>(words: &[S], source: &str) -> DictionaryResource {
    info!("Creating basic structure for {} words", words.len());
    let mut resource = DictionaryResource {
        metadata: Metadata {
            phase: Phase::BasicConversion,
            source: source.to_string(),
            ..Metadata::default()
        },
        words: words.iter().map(|w| WordEntry::new(w.as_ref())).collect(),
        syllables: Some(Vec::new()),
    };
    resource.refresh_counts();
    resource
}

/// Phase 2: overlays corpus counts onto the skeleton.
///
/// Words keep their membership and are re-ordered by descending frequency
/// (ties keep their prior order). The syllable list is rebuilt from `tables`
/// in descending frequency, ties in first-seen order.
pub fn apply_frequencies(
    mut resource: DictionaryResource,
    tables: &FrequencyTables,
) -> DictionaryResource {
    for entry in &mut resource.words {
        entry.frequency = tables.words.get(&entry.word);
    }
    resource.words.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    resource.syllables = Some(
        tables
            .syllables
            .most_common()
            .into_iter()
            .map(|(syllable, frequency)| SyllableEntry { syllable: syllable.to_string(), frequency })
            .collect(),
    );

    resource.refresh_counts();
    resource.metadata.phase = resource.metadata.phase.max(Phase::FrequencyAnalysisComplete);

    info!(
        "Updated frequencies for {} of {} words; {} syllables",
        resource.metadata.words_with_frequency,
        resource.metadata.total_words,
        resource.metadata.total_syllables
    );
    resource
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(words: &[(&str, u64)], syllables: &[(&str, u64)]) -> FrequencyTables {
        let mut tables = FrequencyTables::default();
        for (w, n) in words {
            tables.words.add(w, *n);
        }
        for (s, n) in syllables {
            tables.syllables.add(s, *n);
        }
        tables
    }

    #[test]
    fn skeleton_has_zero_frequencies() {
        let resource = build_skeleton(&["b", "a", "c"], "dictionary.txt");
        assert_eq!(resource.metadata.total_words, 3);
        assert_eq!(resource.metadata.words_with_frequency, 0);
        assert_eq!(resource.metadata.phase, Phase::BasicConversion);
        assert_eq!(resource.metadata.source, "dictionary.txt");
        assert_eq!(resource.syllables, Some(vec![]));
        let words: Vec<&str> = resource.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
        assert!(resource.words.iter().all(|w| w.frequency == 0));
    }

    #[test]
    fn frequencies_sort_words_stably() {
        let skeleton = build_skeleton(&["w1", "w2", "w3", "w4"], "dictionary.txt");
        let resource = apply_frequencies(
            skeleton,
            &tables(&[("w3", 5), ("w2", 1), ("w4", 1), ("unknown", 9)], &[("x", 1), ("y", 4), ("z", 1)]),
        );

        let words: Vec<(&str, u64)> =
            resource.words.iter().map(|w| (w.word.as_str(), w.frequency)).collect();
        assert_eq!(words, vec![("w3", 5), ("w2", 1), ("w4", 1), ("w1", 0)]);

        let syllables: Vec<(&str, u64)> =
            resource.syllables().iter().map(|s| (s.syllable.as_str(), s.frequency)).collect();
        assert_eq!(syllables, vec![("y", 4), ("x", 1), ("z", 1)]);

        assert_eq!(resource.metadata.phase, Phase::FrequencyAnalysisComplete);
        assert_eq!(resource.metadata.total_words, 4);
        assert_eq!(resource.metadata.words_with_frequency, 3);
        assert_eq!(resource.metadata.total_syllables, 3);
        assert_eq!(resource.metadata.syllables_with_frequency, 3);
        assert!(resource.counts_consistent());
    }
}
