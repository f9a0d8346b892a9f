// File: src/config.rs
use crate::core::filter::REMOVED_PREVIEW_LIMIT;
use crate::core::frequency::PROGRESS_INTERVAL;
use std::path::{Path, PathBuf};

pub const DICTIONARY_PATH: &str = "dictionary.txt";
pub const CONVERTED_PATH: &str = "shan_dictionary.json";
pub const FILTERED_PATH: &str = "filtered_frequency_data.json";
pub const TOP_ENTRIES: usize = 5;

/// Options for the skeleton + frequency-analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub dictionary_path: PathBuf,
    /// `None` skips frequency analysis and keeps the skeleton.
    pub corpus_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Recorded as `metadata.source`; defaults to the dictionary file name.
    pub source: Option<String>,
    pub shards: usize,
    pub progress_interval: usize,
    /// Use the maximal-matching tokenizer and script segmenter before falling back.
    pub use_primary: bool,
    pub top_entries: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DICTIONARY_PATH),
            corpus_path: None,
            output_path: PathBuf::from(CONVERTED_PATH),
            source: None,
            shards: 1,
            progress_interval: PROGRESS_INTERVAL,
            use_primary: true,
            top_entries: TOP_ENTRIES,
        }
    }
}

impl ConvertConfig {
    pub fn source_label(&self) -> String {
        self.source.clone().unwrap_or_else(|| file_label(&self.dictionary_path))
    }
}

/// Options for the dictionary-membership filter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub input_path: PathBuf,
    pub dictionary_path: PathBuf,
    pub output_path: PathBuf,
    pub preview_limit: usize,
    pub top_entries: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(CONVERTED_PATH),
            dictionary_path: PathBuf::from(DICTIONARY_PATH),
            output_path: PathBuf::from(FILTERED_PATH),
            preview_limit: REMOVED_PREVIEW_LIMIT,
            top_entries: TOP_ENTRIES,
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
