//! Command-line argument expansion into root paths

use std::path::PathBuf;

use glob::glob;

/// Root used when no patterns are given.
pub const DEFAULT_ROOT: &str = ".";

/// Expand each pattern as a glob, in argument order.
///
/// Patterns that match nothing, or are not valid globs, contribute no roots.
/// Overlapping matches are kept as-is.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<PathBuf> {
    if patterns.is_empty() {
        return vec![PathBuf::from(DEFAULT_ROOT)];
    }

    patterns
        .iter()
        .flat_map(|pattern| expand_pattern(pattern.as_ref()))
        .collect()
}

/// Expand a single glob pattern, silently dropping unreadable matches.
pub fn expand_pattern(pattern: &str) -> Vec<PathBuf> {
    match glob(pattern) {
        Ok(paths) => paths.filter_map(|p| p.ok()).collect(),
        Err(_) => Vec::new(),
    }
}
