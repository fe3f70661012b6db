// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Longest excerpt of searched text shown in a diagnostic.
const EXCERPT_CHARS: usize = 120;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{marker:?} not found in {document} (searched {})", excerpt(.searched))]
    MarkerNotFound {
        document: String,
        marker: String,
        searched: String, // Full cursor text at the failing cut
    },

    #[error("No cuts configured for {0}")]
    EmptySequence(String),

    #[error("Version in {0} is empty after extraction")]
    EmptyVersion(String),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Loading failed: {0}")]
    Load(#[from] LoadError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("not OK: version mismatch ({left_name} {left:?}, {right_name} {right:?})")]
    Mismatch {
        left_name: String,
        left: String,
        right_name: String,
        right: String,
    },
}

/// Quoted, bounded view of `text` for log lines.
pub fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => format!("{:?}...", &text[..idx]),
        None => format!("{:?}", text),
    }
}
