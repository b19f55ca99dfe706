//! Assembling and writing the combined document.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::domain::errors::BundleError;
use crate::domain::model::{CombinedDocument, FileEntry};

const TITLE: &str = "# Combined Documentation";

/// Build the combined document from the sorted candidate list.
///
/// Markdown files are inlined verbatim; anything else goes inside a fenced
/// block so the combined document still renders sanely. Reads are sequential
/// and the first failure aborts the whole run.
pub fn build_document(entries: &[FileEntry]) -> Result<CombinedDocument> {
    let mut fragments = Vec::with_capacity(entries.len() * 2 + 1);
    fragments.push(TITLE.to_owned());

    for entry in entries {
        let content = fs::read_to_string(&entry.path).map_err(|source| BundleError::Read {
            path: entry.path.clone(),
            source,
        })?;
        fragments.push(format!("\n---\n## Source: {}\n---\n", entry.display_path));
        if entry.is_markdown() {
            fragments.push(content);
        } else {
            fragments.push(fence(&content));
        }
    }

    Ok(CombinedDocument {
        text: fragments.join("\n"),
        file_count: entries.len(),
    })
}

fn fence(content: &str) -> String {
    let body = content.strip_suffix('\n').unwrap_or(content);
    format!("```\n{body}\n```")
}

/// Write the document to `out` in one shot, creating parent directories and
/// overwriting any existing file.
pub fn write_document(document: &CombinedDocument, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|source| BundleError::Write {
            path: out.to_path_buf(),
            source,
        })?;
    }
    fs::write(out, &document.text).map_err(|source| BundleError::Write {
        path: out.to_path_buf(),
        source,
    })?;
    Ok(())
}
