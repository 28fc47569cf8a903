//! Configuration types for the walker

use regex::Regex;

/// Directory names never descended into.
pub const DEFAULT_EXCLUDE_DIRS: &str = r"^(\.svn|\.git)$";

/// Editor, Office and Explorer droppings never listed.
pub const DEFAULT_EXCLUDE_FILES: &str = r"(?s)^(~\$.*|Thumbs\.db|.*\.swp)$";

/// Configuration for walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Matched against the bare entry name of every entry.
    pub exclude_dirs: Regex,
    /// Matched against the bare entry name of every entry.
    pub exclude_files: Regex,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: Regex::new(DEFAULT_EXCLUDE_DIRS).expect("valid directory pattern"),
            exclude_files: Regex::new(DEFAULT_EXCLUDE_FILES).expect("valid file pattern"),
        }
    }
}
