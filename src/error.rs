//! Error types shared by the pipeline stages and their collaborators.

use std::path::PathBuf;

/// Result type defaulting to [`DictError`].
pub type Result<T, E = DictError> = std::result::Result<T, E>;

/// Failure of a primary tokenizer or segmenter on a single input.
///
/// Never escapes the capability wrapper; the fallback takes over for that unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// The capability is built from an empty lexicon.
    #[error("lexicon is empty")]
    EmptyLexicon,

    /// The input holds characters the capability does not handle.
    #[error("unsupported character {0:?} in {1:?}")]
    UnsupportedScript(char, String),

    /// Any other per-unit failure.
    #[error("{0}")]
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// A dictionary or corpus source is unavailable or empty.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// A structured document lacks content the stage cannot default.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// The resource could not be written. Nothing is left at the target path.
    #[error("failed to persist resource to '{path}': {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
