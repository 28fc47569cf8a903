//! Legacy-encoding provider for terminals that cannot display UTF-8

use std::borrow::Cow;
use std::fs::Metadata;

use encoding_rs::{Encoding, SHIFT_JIS};

use super::PlatformMetadata;

/// Leaves owner/group empty and transcodes every field to `encoding`.
#[derive(Debug, Clone, Copy)]
pub struct LegacyEncodingPlatform {
    encoding: &'static Encoding,
}

impl LegacyEncodingPlatform {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }
}

impl Default for LegacyEncodingPlatform {
    fn default() -> Self {
        Self::new(SHIFT_JIS)
    }
}

impl PlatformMetadata for LegacyEncodingPlatform {
    fn owner_and_group(&self, _meta: &Metadata) -> (String, String) {
        (String::new(), String::new())
    }

    /// A field containing characters the encoding cannot represent is
    /// written as empty.
    fn encode<'a>(&self, field: &'a str) -> Cow<'a, [u8]> {
        let (bytes, _, had_unmappable) = self.encoding.encode(field);
        if had_unmappable {
            Cow::Borrowed(&[])
        } else {
            bytes
        }
    }
}
