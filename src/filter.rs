//! Directory entry filtering shared by the compressor and the name exporter.

use crate::constants::{COMPRESSIBLE_SUFFIXES, EXPORTABLE_SUFFIXES};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Case-insensitive file name suffix match.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionFilter {
    suffixes: &'static [&'static str],
}

impl ExtensionFilter {
    pub const fn new(suffixes: &'static [&'static str]) -> Self {
        Self { suffixes }
    }

    /// `.jpg` and `.jpeg`, the inputs of the compressor.
    pub const fn compressible() -> Self {
        Self::new(COMPRESSIBLE_SUFFIXES)
    }

    /// `.jpg` only, the inputs of the name exporter.
    pub const fn exportable() -> Self {
        Self::new(EXPORTABLE_SUFFIXES)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.suffixes.iter().any(|suffix| lower.ends_with(suffix))
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.matches_name(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}

/// Lists the direct children of `dir` accepted by `filter`, in the order the
/// filesystem returns them. Directories whose name matches are included too;
/// the caller decides what to do with them.
pub fn list_matching(dir: &Path, filter: ExtensionFilter) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut matches = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if filter.matches_name(&entry.file_name().to_string_lossy()) {
            matches.push(entry.into_path());
        }
    }

    Ok(matches)
}
