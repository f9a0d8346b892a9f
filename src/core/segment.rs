// File: src/core/segment.rs
//! Tokenizer and syllable segmenter capabilities.
//!
//! Each capability has a primary implementation that may fail on a given
//! input and a deterministic fallback that cannot. [`TextProcessor`] tries the
//! primary per input and falls back for that input only.

use crate::core::trie::LexiconTrie;
use crate::error::CapabilityError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

const ASAT: char = '\u{103a}';
const VIRAMA: char = '\u{1039}';

static NON_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\x{1000}-\x{109F}\x{1A20}-\x{1AAF}\s]").expect("static script pattern")
});

/// Myanmar block (including the Shan extensions) and Tai Tham.
pub fn is_core_script(c: char) -> bool {
    matches!(c, '\u{1000}'..='\u{109f}' | '\u{1a20}'..='\u{1aaf}')
}

/// Splits a text into surface tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, CapabilityError>;
}

/// Splits a single token into syllables.
pub trait SyllableSegmenter: Send + Sync {
    fn segment(&self, token: &str) -> Result<Vec<String>, CapabilityError>;
}

/// Fallback tokenizer: blanks out everything outside the core script, then
/// splits on whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternTokenizer;

impl PatternTokenizer {
    pub fn split(&self, text: &str) -> Vec<String> {
        NON_SCRIPT
            .replace_all(text, " ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Tokenizer for PatternTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, CapabilityError> {
        Ok(self.split(text))
    }
}

/// Dictionary-driven maximal matching.
///
/// Within each whitespace-separated chunk the longest lexicon word starting at
/// the current position is taken; characters that start no word are grouped
/// into a single unknown token.
#[derive(Debug, Clone)]
pub struct MaximalMatchTokenizer {
    lexicon: LexiconTrie,
}

impl MaximalMatchTokenizer {
    pub fn new(lexicon: LexiconTrie) -> Self {
        Self { lexicon }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(LexiconTrie::from_words(words))
    }

    fn split_chunk(&self, chunk: &str, tokens: &mut Vec<String>) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut unknown_start: Option<usize> = None;
        let mut i = 0;
        while i < chars.len() {
            match self.lexicon.longest_prefix(&chars[i..]) {
                Some(len) => {
                    if let Some(start) = unknown_start.take() {
                        tokens.push(chars[start..i].iter().collect());
                    }
                    tokens.push(chars[i..i + len].iter().collect());
                    i += len;
                }
                None => {
                    unknown_start.get_or_insert(i);
                    i += 1;
                }
            }
        }
        if let Some(start) = unknown_start {
            tokens.push(chars[start..].iter().collect());
        }
    }
}

impl Tokenizer for MaximalMatchTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, CapabilityError> {
        if self.lexicon.is_empty() {
            return Err(CapabilityError::EmptyLexicon);
        }
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            self.split_chunk(chunk, &mut tokens);
        }
        Ok(tokens)
    }
}

/// Rule-based syllable breaking for Myanmar-script text.
///
/// A syllable starts at a consonant or independent vowel unless it is stacked
/// under the previous one (preceded by virama) or killed (followed by asat or
/// virama).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptSyllableSegmenter;

impl ScriptSyllableSegmenter {
    fn starts_syllable(c: char) -> bool {
        matches!(c, '\u{1000}'..='\u{1021}' | '\u{1023}'..='\u{102a}' | '\u{1075}'..='\u{1081}')
    }
}

impl SyllableSegmenter for ScriptSyllableSegmenter {
    fn segment(&self, token: &str) -> Result<Vec<String>, CapabilityError> {
        if let Some(c) = token.chars().find(|&c| !is_core_script(c)) {
            return Err(CapabilityError::UnsupportedScript(c, token.to_string()));
        }

        let chars: Vec<char> = token.chars().collect();
        let mut syllables = Vec::new();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            let breaks = i > 0
                && Self::starts_syllable(c)
                && chars[i - 1] != VIRAMA
                && !matches!(chars.get(i + 1), Some(&ASAT) | Some(&VIRAMA));
            if breaks && !current.is_empty() {
                syllables.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        if !current.is_empty() {
            syllables.push(current);
        }
        Ok(syllables)
    }
}

/// Pairs the primary capabilities with their fallbacks.
pub struct TextProcessor {
    tokenizer: Option<Box<dyn Tokenizer>>,
    segmenter: Option<Box<dyn SyllableSegmenter>>,
    fallback: PatternTokenizer,
}

impl TextProcessor {
    pub fn new(
        tokenizer: Option<Box<dyn Tokenizer>>,
        segmenter: Option<Box<dyn SyllableSegmenter>>,
    ) -> Self {
        Self { tokenizer, segmenter, fallback: PatternTokenizer }
    }

    /// Only the deterministic fallbacks.
    pub fn fallback_only() -> Self {
        Self::new(None, None)
    }

    /// Maximal matching over `words` plus script-rule syllable breaking.
    pub fn for_lexicon<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            Some(Box::new(MaximalMatchTokenizer::from_words(words))),
            Some(Box::new(ScriptSyllableSegmenter)),
        )
    }

    pub fn has_primary_tokenizer(&self) -> bool {
        self.tokenizer.is_some()
    }

    pub fn has_primary_segmenter(&self) -> bool {
        self.segmenter.is_some()
    }

    /// Tokens of `text`, never containing empty strings.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if let Some(tokenizer) = &self.tokenizer {
            match tokenizer.tokenize(text) {
                Ok(mut tokens) => {
                    tokens.retain(|t| !t.trim().is_empty());
                    return tokens;
                }
                Err(e) => debug!("primary tokenizer failed, using pattern split: {e}"),
            }
        }
        self.fallback.split(text)
    }

    /// Syllables of `token`; a non-empty token always yields at least itself.
    pub fn segment(&self, token: &str) -> Vec<String> {
        if token.is_empty() {
            return Vec::new();
        }
        if let Some(segmenter) = &self.segmenter {
            match segmenter.segment(token) {
                Ok(syllables) if !syllables.is_empty() => return syllables,
                Ok(_) => {}
                Err(e) => debug!("primary segmenter failed, keeping token whole: {e}"),
            }
        }
        vec![token.to_string()]
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::fallback_only()
    }
}
