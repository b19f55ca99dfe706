//! Domain models for discovered files and the combined document.

use std::path::PathBuf;

/// A regular file that survived filtering, ready for inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute (or caller-relative) path used for reading.
    pub path: PathBuf,
    /// Path relative to the scan root, used for headers and ordering.
    pub display_path: String,
}

impl FileEntry {
    /// Whether the entry should be emitted raw rather than fenced.
    pub fn is_markdown(&self) -> bool {
        let lower = self.display_path.to_ascii_lowercase();
        lower.ends_with(".md") || lower.ends_with(".markdown")
    }
}

/// The assembled output document, built once and written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedDocument {
    pub text: String,
    pub file_count: usize,
}
