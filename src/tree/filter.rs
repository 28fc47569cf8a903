//! Name-based exclusion for tree walking

use super::config::WalkerConfig;

/// Skips noise entries by name alone, whatever their file type.
pub struct ExclusionFilter<'a> {
    config: &'a WalkerConfig,
}

impl<'a> ExclusionFilter<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// Check if an entry with this name should be skipped.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.config.exclude_dirs.is_match(name) || self.config.exclude_files.is_match(name)
    }
}
