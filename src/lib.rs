//! lsdirf - list files recursively as tab-separated metadata records

pub mod error;
pub mod expand;
pub mod metadata;
pub mod output;
pub mod platform;
pub mod record;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::EntryError;
pub use expand::expand_patterns;
pub use output::{RecordWriter, TsvRenderer};
pub use platform::{LegacyEncodingPlatform, NativePlatform, PlatformMetadata};
pub use record::{FIELDS, FileRecord};
pub use tree::{RecordSink, TreeWalker, WalkerConfig};

#[cfg(unix)]
pub use platform::PosixPlatform;
