// File: src/sources.rs
//! Word-list and corpus readers.

use crate::core::filter::DictionarySet;
use crate::error::{DictError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reads one word per line, trimmed, skipping empty lines.
/// Later duplicates of a word are dropped so entries stay unique.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    info!("Loading dictionary from {}", path.display());
    if !path.exists() {
        return Err(DictError::MissingInput(format!(
            "dictionary file '{}' not found",
            path.display()
        )));
    }
    let words = parse_word_list(&fs::read_to_string(path)?);
    if words.is_empty() {
        return Err(DictError::MissingInput(format!(
            "no words in dictionary file '{}'",
            path.display()
        )));
    }
    info!("Loaded {} words from dictionary", words.len());
    Ok(words)
}

pub fn parse_word_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}

/// Loads the word list as a lowercase membership set.
pub fn load_dictionary_set(path: &Path) -> Result<DictionarySet> {
    let set: DictionarySet = read_word_list(path)?.into_iter().collect();
    info!("Dictionary set holds {} distinct lowercase words", set.len());
    Ok(set)
}

#[derive(Debug, Deserialize)]
struct ArticleRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Reads corpus documents from a file or a directory of files.
///
/// `.jsonl` files yield each record's `title` and then its `content`; other
/// files yield one document per non-empty line. An unavailable corpus yields
/// no documents rather than an error.
pub fn read_corpus(path: &Path) -> Vec<String> {
    info!("Loading corpus from {}", path.display());
    let files = match corpus_files(path) {
        Ok(files) => files,
        Err(e) => {
            warn!("Error loading corpus: {e}");
            warn!("Proceeding without frequency analysis...");
            return Vec::new();
        }
    };

    let mut texts = Vec::new();
    for file in files {
        match read_corpus_file(&file) {
            Ok(mut docs) => {
                info!("Read {} documents from {}", docs.len(), file.display());
                texts.append(&mut docs);
            }
            Err(e) => warn!("Skipping corpus file {}: {e}", file.display()),
        }
    }
    info!("Loaded {} documents from corpus", texts.len());
    texts
}

fn corpus_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        let mut files = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    } else if path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(DictError::MissingInput(format!("corpus '{}' not found", path.display())))
    }
}

fn read_corpus_file(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "jsonl") {
        parse_jsonl(&raw)
    } else {
        Ok(raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Title then content of each record, skipping blank lines and absent fields.
pub fn parse_jsonl(raw: &str) -> Result<Vec<String>> {
    let mut texts = Vec::new();
    for (n, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: ArticleRecord = serde_json::from_str(line).map_err(|e| {
            DictError::MalformedInput(format!("record on line {}: {e}", n + 1))
        })?;
        texts.extend(record.title);
        texts.extend(record.content);
    }
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn word_list_trims_and_dedups() {
        let words = parse_word_list("  ၵၢၼ်  \n\nman\r\nMan\nman\n");
        assert_eq!(words, vec!["ၵၢၼ်", "man", "Man"]);
    }

    #[test]
    fn missing_word_list_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_word_list(&dir.path().join("dictionary.txt")).unwrap_err();
        assert!(matches!(err, DictError::MissingInput(_)));
    }

    #[test]
    fn blank_word_list_is_missing_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  \n\n").unwrap();
        assert!(matches!(read_word_list(file.path()), Err(DictError::MissingInput(_))));
    }

    #[test]
    fn dictionary_set_is_lowercase() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Man\nMAN\nkind").unwrap();
        let set = load_dictionary_set(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("mAn"));
    }

    #[test]
    fn jsonl_yields_title_then_content() {
        let raw = "{\"title\":\"t1\",\"content\":\"c1\"}\n\n{\"content\":\"c2\",\"url\":\"x\"}\n";
        assert_eq!(parse_jsonl(raw).unwrap(), vec!["t1", "c1", "c2"]);
        assert!(matches!(parse_jsonl("not json"), Err(DictError::MalformedInput(_))));
    }

    #[test]
    fn corpus_directory_reads_sorted_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "second\n\nthird\n").unwrap();
        fs::write(dir.path().join("a.jsonl"), "{\"title\":\"first\"}\n").unwrap();
        assert_eq!(read_corpus(dir.path()), vec!["first", "second", "third"]);
    }

    #[test]
    fn missing_corpus_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_corpus(&dir.path().join("nope")).is_empty());
    }
}
