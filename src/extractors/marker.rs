// src/extractors/marker.rs

// --- Imports ---
use crate::documents::Document;
use crate::utils::error::ExtractError;

// --- Data Structures ---

/// Which half of a cut becomes the new cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    /// Keep the text preceding the marker (bounds the end of the value).
    Before,
    /// Keep the text following the marker (skips past a heading or prefix).
    After,
}

/// One step of a marker sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cut {
    pub marker: String,
    pub keep: Keep,
}

/// Ordered cuts narrowing a document down to its version string.
/// Each cut searches only what the previous one kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSequence {
    cuts: Vec<Cut>,
}

impl MarkerSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cut that keeps the text after `marker`.
    pub fn skip_past(mut self, marker: &str) -> Self {
        self.cuts.push(Cut { marker: marker.to_string(), keep: Keep::After });
        self
    }

    /// Appends a cut that keeps the text before `marker`.
    pub fn stop_at(mut self, marker: &str) -> Self {
        self.cuts.push(Cut { marker: marker.to_string(), keep: Keep::Before });
        self
    }

    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }
}

/// A version string isolated from a document. Never parsed, only compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedVersion {
    pub value: String,
    pub source: String, // Logical name of the document it came from
}

// --- Cutting ---

/// Splits `text` at the first occurrence of `marker`, trimming both halves.
/// Returns `None` when the marker does not occur.
pub fn cut<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    text.split_once(marker)
        .map(|(before, after)| (before.trim(), after.trim()))
}

/// Runs `sequence` over the document text and returns the isolated version.
///
/// Every cut must find its marker in the current cursor; the first miss is
/// returned as `ExtractError::MarkerNotFound` carrying the text that was searched.
pub fn extract(document: &Document, sequence: &MarkerSequence) -> Result<ExtractedVersion, ExtractError> {
    if sequence.is_empty() {
        return Err(ExtractError::EmptySequence(document.name.clone()));
    }

    let mut cursor: &str = &document.text;
    for (step, c) in sequence.cuts().iter().enumerate() {
        let (before, after) = cut(cursor, &c.marker).ok_or_else(|| {
            tracing::debug!("Cut {} ({:?}) failed in {}", step, c.marker, document.name);
            ExtractError::MarkerNotFound {
                document: document.name.clone(),
                marker: c.marker.clone(),
                searched: cursor.to_string(),
            }
        })?;

        cursor = match c.keep {
            Keep::Before => before,
            Keep::After => after,
        };
        tracing::trace!("Cut {} ({:?}, keep {:?}) left {} bytes", step, c.marker, c.keep, cursor.len());
    }

    if cursor.is_empty() {
        return Err(ExtractError::EmptyVersion(document.name.clone()));
    }

    tracing::debug!("Extracted {:?} from {}", cursor, document.name);
    Ok(ExtractedVersion {
        value: cursor.to_string(),
        source: document.name.clone(),
    })
}
