// File: src/core/frequency.rs
use crate::core::segment::TextProcessor;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Default number of documents between progress lines.
pub const PROGRESS_INTERVAL: usize = 100;

/// String counts that remember the order in which keys were first seen.
#[derive(Debug, Clone, Default)]
pub struct CountTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &str, count: u64) {
        match self.index.get(key) {
            Some(&idx) => self.entries[idx].1 += count,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), count));
            }
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map_or(0, |&idx| self.entries[idx].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// Entries by descending count; ties keep first-seen order.
    pub fn most_common(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<(&str, u64)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// Sums `other` into `self`. Keys new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: CountTable) {
        for (key, count) in other.entries {
            self.add(&key, count);
        }
    }
}

impl PartialEq for CountTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for CountTable {}

/// Word and syllable counts from one corpus pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTables {
    pub words: CountTable,
    pub syllables: CountTable,
    pub documents: usize,
    pub tokens: u64,
}

impl FrequencyTables {
    pub fn merge(&mut self, other: FrequencyTables) {
        self.words.merge(other.words);
        self.syllables.merge(other.syllables);
        self.documents += other.documents;
        self.tokens += other.tokens;
    }
}

/// Streams corpus documents through the tokenizer and segmenter.
///
/// Word counting is gated on exact membership in `dictionary`; every token
/// contributes its syllables.
pub struct FrequencyAccumulator<'a> {
    processor: &'a TextProcessor,
    dictionary: &'a HashSet<String>,
    progress_interval: usize,
}

impl<'a> FrequencyAccumulator<'a> {
    pub fn new(processor: &'a TextProcessor, dictionary: &'a HashSet<String>) -> Self {
        Self { processor, dictionary, progress_interval: PROGRESS_INTERVAL }
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Counts every document in order on the current thread.
    pub fn accumulate(&self, texts: &[String]) -> FrequencyTables {
        info!("Analyzing frequencies from {} documents", texts.len());
        let mut tables = FrequencyTables::default();
        for (i, text) in texts.iter().enumerate() {
            self.log_progress(i, texts.len());
            self.process_text(text, &mut tables);
        }
        self.report(&tables);
        tables
    }

    /// Counts contiguous shards independently, then merges them in shard order.
    ///
    /// Produces the same tables as [`accumulate`](Self::accumulate), including
    /// first-seen key order.
    pub fn accumulate_sharded(&self, texts: &[String], shards: usize) -> FrequencyTables {
        if shards <= 1 || texts.len() < 2 {
            return self.accumulate(texts);
        }
        let shard_len = texts.len().div_ceil(shards);
        info!(
            "Analyzing frequencies from {} documents in {} shards",
            texts.len(),
            texts.len().div_ceil(shard_len)
        );

        let partials: Vec<FrequencyTables> = texts
            .par_chunks(shard_len)
            .enumerate()
            .map(|(shard, chunk)| {
                let offset = shard * shard_len;
                let mut tables = FrequencyTables::default();
                for (i, text) in chunk.iter().enumerate() {
                    self.log_progress(offset + i, texts.len());
                    self.process_text(text, &mut tables);
                }
                info!("Shard {} finished: {} documents", shard, chunk.len());
                tables
            })
            .collect();

        let mut tables = FrequencyTables::default();
        for partial in partials {
            tables.merge(partial);
        }
        self.report(&tables);
        tables
    }

    /// Whether document `index` (position in the whole corpus) gets a progress line.
    fn is_progress_point(&self, index: usize) -> bool {
        index % self.progress_interval == 0
    }

    fn log_progress(&self, index: usize, total: usize) {
        if self.is_progress_point(index) {
            info!("Processing article {}/{}", index, total);
        }
    }

    fn process_text(&self, text: &str, tables: &mut FrequencyTables) {
        let tokens = self.processor.tokenize(text);
        tables.documents += 1;
        tables.tokens += tokens.len() as u64;

        for token in &tokens {
            if self.dictionary.contains(token.as_str()) {
                tables.words.increment(token);
            }
            for syllable in self.processor.segment(token) {
                tables.syllables.increment(&syllable);
            }
        }
    }

    fn report(&self, tables: &FrequencyTables) {
        info!(
            "Found frequencies for {} dictionary words over {} tokens",
            tables.words.len(),
            tables.tokens
        );
        info!("Found {} unique syllables", tables.syllables.len());
    }
}
