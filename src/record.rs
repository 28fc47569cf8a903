//! The nine-field row emitted for every file

/// One output row. Every field is text; a field that could not be determined
/// is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRecord {
    pub mode: String,
    pub owner: String,
    pub group: String,
    pub mtime: String,
    pub size: String,
    pub extension: String,
    pub name: String,
    pub full_path: String,
    pub link_target: String,
}

/// Accessor for one column of a [`FileRecord`].
pub type FieldAccessor = fn(&FileRecord) -> &str;

/// Column order of the output. Header names and record values are both
/// produced from this table.
pub static FIELDS: [(&str, FieldAccessor); 9] = [
    ("mode", |r| r.mode.as_str()),
    ("owner", |r| r.owner.as_str()),
    ("group", |r| r.group.as_str()),
    ("mtime", |r| r.mtime.as_str()),
    ("size", |r| r.size.as_str()),
    ("extension", |r| r.extension.as_str()),
    ("name", |r| r.name.as_str()),
    ("fullPath", |r| r.full_path.as_str()),
    ("linkTarget", |r| r.link_target.as_str()),
];

/// Column separator.
pub const SEPARATOR: &str = "\t";

impl FileRecord {
    /// Field values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        FIELDS.iter().map(move |(_, get)| get(self))
    }

    /// Header names in column order.
    pub fn header() -> impl Iterator<Item = &'static str> {
        FIELDS.iter().map(|(name, _)| *name)
    }
}
