// src/documents/mod.rs
pub mod sources;

use std::fs;
use std::path::Path;
use crate::utils::error::LoadError;

/// Raw text of one input file plus the name used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }

    /// Reads `path` (relative to `root`) as UTF-8 text.
    /// The document is named by `path` as given, not the joined location.
    pub fn read<P: AsRef<Path>, Q: AsRef<Path>>(root: P, path: Q) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let full_path = root.as_ref().join(path);

        let text = fs::read_to_string(&full_path)
            .map_err(|source| LoadError::Read { path: full_path.clone(), source })?;

        tracing::debug!("Read {} ({} bytes)", full_path.display(), text.len());
        Ok(Self::new(path.display().to_string(), text))
    }
}
