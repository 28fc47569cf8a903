//! Directory walking logic
//!
//! `TreeWalker` descends depth-first through each root, drops excluded names,
//! and hands every non-directory entry to a `RecordSink`.

mod config;
mod filter;
mod walker;

// Re-export public types
pub use config::{DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, WalkerConfig};
pub use filter::ExclusionFilter;
pub use walker::{RecordSink, TreeWalker};
