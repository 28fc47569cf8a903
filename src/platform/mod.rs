//! Platform-specific parts of a record
//!
//! The traversal and rendering core is shared; what differs between platforms
//! is how owner/group are resolved, how the absolute path is displayed, and how
//! each field is encoded on the way out.
//!
//! - `PosixPlatform` - identity database lookups, `~/` collapsing, UTF-8 output
//! - `LegacyEncodingPlatform` - no identity fields, output transcoded to a
//!   legacy double-byte encoding (Shift_JIS by default)

use std::borrow::Cow;
use std::fs::Metadata;
use std::path::Path;

mod legacy;
#[cfg(unix)]
mod posix;

pub use legacy::LegacyEncodingPlatform;
#[cfg(unix)]
pub use posix::PosixPlatform;

/// The provider used by the binary on this platform.
#[cfg(unix)]
pub type NativePlatform = PosixPlatform;

/// The provider used by the binary on this platform.
#[cfg(not(unix))]
pub type NativePlatform = LegacyEncodingPlatform;

/// Platform hooks consulted while building and writing a record.
pub trait PlatformMetadata {
    /// Owner and group names for a stat result. Empty strings when the
    /// platform has no such concept.
    fn owner_and_group(&self, meta: &Metadata) -> (String, String);

    /// Text shown in the `fullPath` column for an absolute path.
    fn display_path(&self, absolute: &Path) -> String {
        absolute.to_string_lossy().into_owned()
    }

    /// Bytes written for one field value.
    fn encode<'a>(&self, field: &'a str) -> Cow<'a, [u8]> {
        Cow::Borrowed(field.as_bytes())
    }
}
