//! TreeWalker - depth-first traversal feeding a record sink

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{self, EntryError};

use super::config::WalkerConfig;
use super::filter::ExclusionFilter;

/// Callback for the walker - receives every path that should become a record.
pub trait RecordSink {
    fn render(&mut self, path: &Path) -> io::Result<()>;

    /// Called for non-fatal errors met while walking or rendering.
    fn report(&mut self, err: &EntryError) {
        error::report(err);
    }
}

/// Recursive walker. Directories are descended into, everything else is
/// handed to the sink.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return the number of records rendered.
    ///
    /// A root that cannot be listed as a directory is rendered as a single
    /// file. Only sink write errors are returned.
    pub fn walk<S: RecordSink>(&self, root: &Path, sink: &mut S) -> io::Result<usize> {
        let filter = ExclusionFilter::new(&self.config);
        self.walk_dir(root, &filter, sink)
    }

    fn walk_dir<S: RecordSink>(
        &self,
        path: &Path,
        filter: &ExclusionFilter<'_>,
        sink: &mut S,
    ) -> io::Result<usize> {
        let names = match read_entry_names(path) {
            Some(names) => names,
            None => {
                sink.render(path)?;
                return Ok(1);
            }
        };

        let mut rendered = 0;
        for name in names {
            if filter.is_excluded(&name.to_string_lossy()) {
                continue;
            }

            let entry_path = path.join(&name);
            if is_dir(&entry_path, sink) {
                rendered += self.walk_dir(&entry_path, filter, sink)?;
            } else {
                sink.render(&entry_path)?;
                rendered += 1;
            }
        }
        Ok(rendered)
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// Entry names of a directory, sorted. `None` if `path` cannot be listed.
fn read_entry_names(path: &Path) -> Option<Vec<OsString>> {
    let entries = fs::read_dir(path).ok()?;
    let mut names: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.file_name()).collect();
    names.sort();
    Some(names)
}

/// Symlink-following directory test. Stat failures are reported and count
/// as "not a directory".
fn is_dir<S: RecordSink>(path: &Path, sink: &mut S) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_dir(),
        Err(source) => {
            sink.report(&EntryError::Stat {
                path: path.to_path_buf(),
                source,
            });
            false
        }
    }
}
