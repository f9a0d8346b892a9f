// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod report;
pub mod sources;

pub use crate::core::builder::{apply_frequencies, build_skeleton};
pub use crate::core::engine::{run_filter, DictionaryConverter, ResourceSummary};
pub use crate::core::filter::{filter_syllables_by_dictionary, DictionarySet, FilterReport};
pub use crate::core::frequency::{CountTable, FrequencyAccumulator, FrequencyTables};
pub use crate::core::segment::{SyllableSegmenter, TextProcessor, Tokenizer};
pub use crate::core::types::{DictionaryResource, Metadata, Phase, SyllableEntry, WordEntry};
pub use crate::error::{CapabilityError, DictError, Result};
