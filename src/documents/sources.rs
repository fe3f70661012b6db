// src/documents/sources.rs
use once_cell::sync::Lazy;
use std::path::Path;

use crate::documents::Document;
use crate::extractors::{extract, ExtractedVersion, MarkerSequence};
use crate::utils::AppError;

/// A document convention: where the file usually lives and how to cut the
/// version out of it. Markers are fixed; only the path can be overridden.
#[derive(Debug)]
pub struct VersionSource {
    pub label: &'static str,
    pub default_path: &'static str,
    pub markers: MarkerSequence,
}

/// Changelog section of the README, newest release heading first:
///
/// ```text
/// Changelog
/// ==============================================================================
///
/// ### v2.0.0
/// ```
pub static CHANGELOG: Lazy<VersionSource> = Lazy::new(|| VersionSource {
    label: "readme",
    default_path: "README.md",
    markers: MarkerSequence::new()
        .skip_past("\nChangelog")
        .skip_past("### v")
        .stop_at("\n"),
});

/// Version constant in the C library entry point: `#define SQINN_VERSION "2.0.0"`.
pub static SOURCE_DEFINE: Lazy<VersionSource> = Lazy::new(|| VersionSource {
    label: "source",
    default_path: "lib/main.c",
    markers: MarkerSequence::new()
        .skip_past("#define SQINN_VERSION \"")
        .stop_at("\""),
});

impl VersionSource {
    /// Reads the document at `path` (or the default path) under `root` and extracts its version.
    pub fn load(&self, root: &Path, path: Option<&str>) -> Result<ExtractedVersion, AppError> {
        let path = path.unwrap_or(self.default_path);
        tracing::debug!("Loading {} version from {}", self.label, path);

        let document = Document::read(root, path)?;
        let version = extract(&document, &self.markers)?;
        Ok(version)
    }
}
