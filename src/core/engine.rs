use crate::config::{ConvertConfig, FilterConfig};
use crate::core::builder::{apply_frequencies, build_skeleton};
use crate::core::filter::{filter_syllables_by_dictionary, DictionarySet, FilterReport};
use crate::core::frequency::{FrequencyAccumulator, FrequencyTables};
use crate::core::segment::TextProcessor;
use crate::core::types::{DictionaryResource, Metadata, SyllableEntry, WordEntry};
use crate::error::Result;
use crate::persistence::{load_resource, save_resource};
use crate::sources::{load_dictionary_set, read_corpus, read_word_list};
use std::collections::HashSet;
use tracing::{info, warn};

/// Metadata plus the most frequent entries of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSummary {
    pub metadata: Metadata,
    pub top_words: Vec<WordEntry>,
    pub top_syllables: Vec<SyllableEntry>,
}

impl ResourceSummary {
    pub fn of(resource: &DictionaryResource, top: usize) -> Self {
        Self {
            metadata: resource.metadata.clone(),
            top_words: resource.words.iter().take(top).cloned().collect(),
            top_syllables: resource.syllables().iter().take(top).cloned().collect(),
        }
    }
}

/// Result of one conversion: the resource and, when a corpus was analyzed,
/// the tables it was built from.
#[derive(Debug)]
pub struct Conversion {
    pub resource: DictionaryResource,
    pub tables: Option<FrequencyTables>,
}

/// Runs the skeleton and frequency-analysis stages.
pub struct DictionaryConverter {
    config: ConvertConfig,
}

impl DictionaryConverter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Text processing for `words`: primary capabilities unless disabled.
    pub fn processor_for(&self, words: &[String]) -> TextProcessor {
        let processor = if self.config.use_primary {
            TextProcessor::for_lexicon(words)
        } else {
            TextProcessor::fallback_only()
        };
        info!(
            "Tokenizer: {}; syllable segmenter: {}",
            if processor.has_primary_tokenizer() { "maximal matching" } else { "pattern fallback" },
            if processor.has_primary_segmenter() { "script rules" } else { "whole token" }
        );
        processor
    }

    /// Builds the resource from in-memory inputs. An empty corpus leaves the
    /// skeleton in the basic phase.
    pub fn convert(&self, words: &[String], texts: &[String], processor: &TextProcessor) -> Conversion {
        let skeleton = build_skeleton(words, &self.config.source_label());
        if texts.is_empty() {
            warn!("No corpus data available. Keeping basic structure only.");
            return Conversion { resource: skeleton, tables: None };
        }

        let dictionary: HashSet<String> = words.iter().cloned().collect();
        let accumulator = FrequencyAccumulator::new(processor, &dictionary)
            .with_progress_interval(self.config.progress_interval);
        let tables = accumulator.accumulate_sharded(texts, self.config.shards);
        let resource = apply_frequencies(skeleton, &tables);
        Conversion { resource, tables: Some(tables) }
    }

    /// Reads the inputs, converts, and persists the resource.
    ///
    /// A missing or empty word list halts before anything is written; a
    /// missing corpus degrades to the skeleton.
    pub fn run(&self) -> Result<ResourceSummary> {
        info!("Starting dictionary conversion process...");
        let words = read_word_list(&self.config.dictionary_path)?;
        let processor = self.processor_for(&words);

        let texts = match &self.config.corpus_path {
            Some(path) => read_corpus(path),
            None => {
                warn!("No corpus configured; skipping frequency analysis");
                Vec::new()
            }
        };

        let conversion = self.convert(&words, &texts, &processor);
        save_resource(&conversion.resource, &self.config.output_path)?;
        Ok(ResourceSummary::of(&conversion.resource, self.config.top_entries))
    }
}

/// Loads a persisted resource, filters its syllables against the dictionary
/// and persists the result.
pub fn run_filter(config: &FilterConfig) -> Result<(ResourceSummary, FilterReport)> {
    let dictionary: DictionarySet = load_dictionary_set(&config.dictionary_path)?;
    let resource = load_resource(&config.input_path)?;
    let (filtered, report) =
        filter_syllables_by_dictionary(resource, &dictionary, config.preview_limit);
    save_resource(&filtered, &config.output_path)?;
    Ok((ResourceSummary::of(&filtered, config.top_entries), report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Phase;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_corpus_keeps_skeleton() {
        let converter = DictionaryConverter::new(ConvertConfig::default());
        let words = strings(&["ၵၢၼ်", "ၶႃႈ"]);
        let conversion = converter.convert(&words, &[], &converter.processor_for(&words));

        assert!(conversion.tables.is_none());
        assert_eq!(conversion.resource.metadata.phase, Phase::BasicConversion);
        assert_eq!(conversion.resource.syllables, Some(vec![]));
        assert!(conversion.resource.words.iter().all(|w| w.frequency == 0));
    }

    #[test]
    fn shan_corpus_through_primary_capabilities() {
        let converter = DictionaryConverter::new(ConvertConfig::default());
        let words = strings(&["မႂ်ႇသုင်", "ၵၢၼ်"]);
        let texts = strings(&["မႂ်ႇသုင်ၵၢၼ် hello ၵၢၼ်"]);
        let conversion = converter.convert(&words, &texts, &converter.processor_for(&words));
        let resource = conversion.resource;

        assert_eq!(resource.words[0], WordEntry { word: "ၵၢၼ်".into(), frequency: 2 });
        assert_eq!(resource.words[1], WordEntry { word: "မႂ်ႇသုင်".into(), frequency: 1 });
        let syllables: Vec<(&str, u64)> =
            resource.syllables().iter().map(|s| (s.syllable.as_str(), s.frequency)).collect();
        assert_eq!(syllables, vec![("ၵၢၼ်", 2), ("မႂ်ႇ", 1), ("သုင်", 1), ("hello", 1)]);
        assert!(resource.counts_consistent());
    }

    #[test]
    fn primary_can_be_disabled() {
        let words = strings(&["ၵၢၼ်"]);
        let with_primary = DictionaryConverter::new(ConvertConfig::default()).processor_for(&words);
        assert!(with_primary.has_primary_tokenizer());

        let config = ConvertConfig { use_primary: false, ..ConvertConfig::default() };
        let fallback = DictionaryConverter::new(config).processor_for(&words);
        assert!(!fallback.has_primary_tokenizer());
        assert!(!fallback.has_primary_segmenter());
    }

    #[test]
    fn summary_takes_top_entries() {
        let converter = DictionaryConverter::new(ConvertConfig::default());
        let words = strings(&["a", "b", "c"]);
        let conversion = converter.convert(&words, &[], &TextProcessor::fallback_only());
        let summary = ResourceSummary::of(&conversion.resource, 2);
        assert_eq!(summary.top_words.len(), 2);
        assert!(summary.top_syllables.is_empty());
        assert_eq!(summary.metadata.total_words, 3);
    }
}
