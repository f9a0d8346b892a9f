// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One dictionary word and the number of times it was seen as a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub frequency: u64,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into(), frequency: 0 }
    }
}

/// One sub-word unit produced by the segmenter and its corpus count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableEntry {
    pub syllable: String,
    pub frequency: u64,
}

/// The last completed pipeline stage. Ordered so that later stages compare greater.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    BasicConversion,
    FrequencyAnalysisComplete,
    DictionaryFiltered,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::BasicConversion => "basic_conversion",
            Phase::FrequencyAnalysisComplete => "frequency_analysis_complete",
            Phase::DictionaryFiltered => "dictionary_filtered",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary counters kept in step with the entry sets.
/// Counters absent from a loaded document are re-derived by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub total_words: usize,
    #[serde(default)]
    pub words_with_frequency: usize,
    #[serde(default)]
    pub total_syllables: usize,
    #[serde(default)]
    pub syllables_with_frequency: usize,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default)]
    pub source: String,
}

/// The persisted dictionary document.
///
/// `syllables` is `None` only for documents loaded without a `syllables`
/// field; everything the builder produces carries `Some`, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryResource {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub words: Vec<WordEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllables: Option<Vec<SyllableEntry>>,
}

impl DictionaryResource {
    pub fn syllables(&self) -> &[SyllableEntry] {
        self.syllables.as_deref().unwrap_or(&[])
    }

    /// Re-derives the four counters from the entry sets as they stand.
    pub fn refresh_counts(&mut self) {
        self.refresh_word_counts();
        self.refresh_syllable_counts();
    }

    pub fn refresh_word_counts(&mut self) {
        self.metadata.total_words = self.words.len();
        self.metadata.words_with_frequency =
            self.words.iter().filter(|w| w.frequency > 0).count();
    }

    pub fn refresh_syllable_counts(&mut self) {
        let syllables = self.syllables.as_deref().unwrap_or(&[]);
        self.metadata.total_syllables = syllables.len();
        self.metadata.syllables_with_frequency =
            syllables.iter().filter(|s| s.frequency > 0).count();
    }

    /// True when every counter agrees with the entry sets.
    pub fn counts_consistent(&self) -> bool {
        let syllables = self.syllables();
        self.metadata.total_words == self.words.len()
            && self.metadata.words_with_frequency
                == self.words.iter().filter(|w| w.frequency > 0).count()
            && self.metadata.total_syllables == syllables.len()
            && self.metadata.syllables_with_frequency
                == syllables.iter().filter(|s| s.frequency > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_serializes_snake_case() {
        let json = serde_json::to_string(&Phase::FrequencyAnalysisComplete).unwrap();
        assert_eq!(json, "\"frequency_analysis_complete\"");
        assert!(Phase::BasicConversion < Phase::DictionaryFiltered);
    }

    #[test]
    fn missing_syllables_field_stays_absent() {
        let raw = r#"{"metadata":{"total_words":1,"source":"dictionary.txt","phase":"basic_conversion"},
                     "words":[{"word":"a","frequency":0}]}"#;
        let resource: DictionaryResource = serde_json::from_str(raw).unwrap();
        assert!(resource.syllables.is_none());
        assert_eq!(resource.metadata.words_with_frequency, 0);

        let back = serde_json::to_value(&resource).unwrap();
        assert!(back.get("syllables").is_none());
    }

    #[test]
    fn refresh_counts_matches_entries() {
        let mut resource = DictionaryResource {
            metadata: Metadata::default(),
            words: vec![
                WordEntry { word: "a".into(), frequency: 3 },
                WordEntry::new("b"),
            ],
            syllables: Some(vec![SyllableEntry { syllable: "a".into(), frequency: 0 }]),
        };
        assert!(!resource.counts_consistent());
        resource.refresh_counts();
        assert_eq!(resource.metadata.total_words, 2);
        assert_eq!(resource.metadata.words_with_frequency, 1);
        assert_eq!(resource.metadata.total_syllables, 1);
        assert_eq!(resource.metadata.syllables_with_frequency, 0);
        assert!(resource.counts_consistent());
    }
}
