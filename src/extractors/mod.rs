// src/extractors/mod.rs
pub mod marker;

// Re-export key extraction types for convenience
pub use marker::{extract, ExtractedVersion, MarkerSequence};
