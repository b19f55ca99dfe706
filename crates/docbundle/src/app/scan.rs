//! Source tree scanning and candidate selection.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::domain::errors::BundleError;
use crate::domain::model::FileEntry;

/// Directory names pruned from the walk wherever they appear below the root.
const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "target",
    "dist",
    "build",
    "vendor",
    ".cache",
    "tmp",
];

/// Filename patterns dropped from the candidate list. `*` matches zero or
/// more characters.
const EXCLUDED_FILES: &[&str] = &[
    ".DS_Store",
    "Thumbs.db",
    "*.lock",
    "*.log",
    "*.tmp",
    "*.swp",
];

/// Configuration inputs for the scanner.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub root: PathBuf,
}

impl ScannerConfig {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Scanner walking the source tree and producing the sorted candidate list.
#[derive(Debug, Default)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Self
    }

    /// Validate the root, walk it, apply the denylist, and sort.
    ///
    /// The walk runs with standard filters disabled: the fixed denylist is
    /// the entire policy, so `.gitignore` files and hidden-file heuristics
    /// must not influence which files are collected.
    pub fn scan(&self, cfg: &ScannerConfig) -> Result<Vec<FileEntry>> {
        validate_root(&cfg.root)?;

        let matcher = build_file_matcher()?;
        let mut builder = WalkBuilder::new(&cfg.root);
        builder.standard_filters(false);
        builder.filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir && entry.file_name().to_str().is_some_and(is_excluded_dir))
        });

        let mut files = Vec::new();
        for result in builder.build() {
            let entry = result.context("directory walk failed")?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if matcher.is_match(Path::new(entry.file_name())) {
                tracing::debug!(path = %entry.path().display(), "excluded by filename pattern");
                continue;
            }
            files.push(FileEntry {
                path: entry.path().to_path_buf(),
                display_path: to_display_path(&cfg.root, entry.path()),
            });
        }

        files.sort_by(|a, b| a.display_path.cmp(&b.display_path));
        Ok(files)
    }
}

fn validate_root(root: &Path) -> Result<(), BundleError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(BundleError::SourceNotADirectory(root.to_path_buf())),
        Err(_) => Err(BundleError::SourceNotFound(root.to_path_buf())),
    }
}

fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}

fn build_file_matcher() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in EXCLUDED_FILES {
        let glob = Glob::new(pattern).context("invalid filename pattern")?;
        builder.add(glob);
    }
    builder.build().context("failed to build filename matcher")
}

fn to_display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn skips_denylisted_dirs_and_filename_patterns() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();

        fs::create_dir_all(root.join("docs"))?;
        fs::create_dir_all(root.join("node_modules/pkg"))?;
        fs::create_dir_all(root.join(".git"))?;
        fs::write(root.join("docs/guide.md"), b"# guide")?;
        fs::write(root.join("node_modules/pkg/readme.md"), b"dep")?;
        fs::write(root.join(".git/HEAD"), b"ref: main")?;
        fs::write(root.join("Cargo.lock"), b"lock")?;
        fs::write(root.join("debug.log"), b"log")?;
        fs::write(root.join("notes.txt"), b"notes")?;

        let cfg = ScannerConfig::from_root(root);
        let entries = Scanner::new().scan(&cfg)?;
        let paths: Vec<_> = entries.iter().map(|e| e.display_path.as_str()).collect();

        assert_eq!(paths, vec!["docs/guide.md", "notes.txt"]);
        Ok(())
    }

    #[test]
    fn sorts_by_display_path_and_stays_stable() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();

        fs::create_dir_all(root.join("b"))?;
        fs::create_dir_all(root.join("a"))?;
        fs::write(root.join("b/readme.md"), b"b")?;
        fs::write(root.join("a/readme.md"), b"a")?;
        fs::write(root.join("z.md"), b"z")?;

        let cfg = ScannerConfig::from_root(root);
        let first = Scanner::new().scan(&cfg)?;
        let second = Scanner::new().scan(&cfg)?;

        let paths: Vec<_> = first.iter().map(|e| e.display_path.as_str()).collect();
        assert_eq!(paths, vec!["a/readme.md", "b/readme.md", "z.md"]);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn root_named_like_excluded_dir_is_still_scanned() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path().join("tmp");
        fs::create_dir_all(&root)?;
        fs::write(root.join("kept.md"), b"kept")?;

        let cfg = ScannerConfig::from_root(&root);
        let entries = Scanner::new().scan(&cfg)?;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_path, "kept.md");
        Ok(())
    }

    #[test]
    fn missing_source_reports_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let cfg = ScannerConfig::from_root(temp.path().join("nope"));
        let err = Scanner::new().scan(&cfg).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BundleError>(),
            Some(BundleError::SourceNotFound(_))
        ));
    }

    #[test]
    fn file_source_reports_not_a_directory() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = temp.path().join("file.md");
        fs::write(&file, b"not a dir")?;

        let cfg = ScannerConfig::from_root(&file);
        let err = Scanner::new().scan(&cfg).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BundleError>(),
            Some(BundleError::SourceNotADirectory(_))
        ));
        Ok(())
    }
}
