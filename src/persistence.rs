// File: src/persistence.rs
use crate::core::types::DictionaryResource;
use crate::error::{DictError, Result};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Writes the resource as indented UTF-8 JSON (non-ASCII left unescaped).
///
/// The document is written to a temporary file beside `path` and moved into
/// place, so a failed save leaves any previous file untouched.
pub fn save_resource(resource: &DictionaryResource, path: &Path) -> Result<()> {
    info!("Saving JSON to {}", path.display());
    write_atomically(resource, path).map_err(|source| DictError::Persistence {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Successfully saved JSON to {}", path.display());
    Ok(())
}

fn write_atomically(resource: &DictionaryResource, path: &Path) -> std::io::Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, resource)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp_file.persist(path)?;
    Ok(())
}

pub fn load_resource(path: &Path) -> Result<DictionaryResource> {
    if !path.exists() {
        return Err(DictError::MissingInput(format!(
            "JSON file '{}' not found",
            path.display()
        )));
    }
    let reader = BufReader::new(File::open(path)?);
    let document: Value = serde_json::from_reader(reader)?;
    let resource = resource_from_document(document)?;
    info!("Loaded JSON data from '{}'", path.display());
    Ok(resource)
}

/// Decodes a resource, re-deriving counters the document does not carry.
///
/// Word counters are rebuilt when either is absent; syllable counters when
/// either is absent and a syllable list is present.
pub fn resource_from_document(document: Value) -> Result<DictionaryResource> {
    let metadata = document.get("metadata").and_then(Value::as_object);
    let has = |key: &str| metadata.is_some_and(|m| m.contains_key(key));
    let words_counted = has("total_words") && has("words_with_frequency");
    let syllables_counted = has("total_syllables") && has("syllables_with_frequency");

    let mut resource: DictionaryResource = serde_json::from_value(document)?;
    if !words_counted {
        warn!("Word counters missing from document; deriving them from entries");
        resource.refresh_word_counts();
    }
    if !syllables_counted && resource.syllables.is_some() {
        warn!("Syllable counters missing from document; deriving them from entries");
        resource.refresh_syllable_counts();
    }
    Ok(resource)
}
