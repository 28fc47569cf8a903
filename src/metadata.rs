//! Metadata extraction: turn a path into a [`FileRecord`]
//!
//! Everything here is best effort. A failed stat yields a blank record and a
//! failed link resolution yields an empty link target; both are pushed onto
//! the caller's diagnostics list instead of aborting.

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::error::EntryError;
use crate::platform::PlatformMetadata;
use crate::record::FileRecord;

/// Format used for the `mtime` column.
pub const MTIME_FORMAT: &str = "%Y-%m-%d %H:%M";

impl FileRecord {
    /// Build the record for `path`.
    ///
    /// Non-fatal failures are appended to `diagnostics`.
    pub fn collect<P: PlatformMetadata + ?Sized>(
        path: &Path,
        platform: &P,
        diagnostics: &mut Vec<EntryError>,
    ) -> FileRecord {
        let meta = match fs::metadata(path) {
            Ok(m) => m,
            Err(source) => {
                diagnostics.push(EntryError::Stat {
                    path: path.to_path_buf(),
                    source,
                });
                return FileRecord::default();
            }
        };

        let absolute = absolute_path(path);
        let link_target = match link_target(path, &absolute) {
            Ok(target) => target.map(|t| t.to_string_lossy().into_owned()),
            Err(e) => {
                diagnostics.push(e);
                None
            }
        };
        let (owner, group) = platform.owner_and_group(&meta);

        FileRecord {
            mode: mode_string(&meta),
            owner,
            group,
            mtime: meta.modified().map(format_mtime).unwrap_or_default(),
            size: meta.len().to_string(),
            extension: extension(path),
            name: file_name(path),
            full_path: platform.display_path(&absolute),
            link_target: link_target.unwrap_or_default(),
        }
    }
}

/// Format a modification time in the local time zone.
pub fn format_mtime(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(MTIME_FORMAT).to_string()
}

/// Lexically cleaned absolute form of `path`. Symlinks are not resolved.
pub fn absolute_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    path_clean::clean(joined)
}

/// The suffix of the final component from its last dot on, or empty.
/// Dotfiles count as all extension: `.bashrc` gives `.bashrc`.
pub fn extension(path: &Path) -> String {
    let name = file_name(path);
    match name.rfind('.') {
        Some(i) => name[i..].to_string(),
        None => String::new(),
    }
}

/// Final component of `path`, or the whole path when it has none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Resolve the target of `path` if it is a symlink.
///
/// `Ok(None)` for anything that is not a symlink, including entries that
/// cannot be lstat'ed.
pub fn link_target(path: &Path, absolute: &Path) -> Result<Option<PathBuf>, EntryError> {
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return Ok(None);
    }
    fs::canonicalize(absolute)
        .map(Some)
        .map_err(|source| EntryError::ResolveLink {
            path: absolute.to_path_buf(),
            source,
        })
}

/// `ls -l` style type and permission string, e.g. `-rw-r--r--`.
#[cfg(unix)]
pub fn mode_string(meta: &Metadata) -> String {
    use std::os::unix::fs::{FileTypeExt, PermissionsExt};

    let ft = meta.file_type();
    let kind = if ft.is_symlink() {
        'l'
    } else if ft.is_dir() {
        'd'
    } else if ft.is_block_device() {
        'b'
    } else if ft.is_char_device() {
        'c'
    } else if ft.is_fifo() {
        'p'
    } else if ft.is_socket() {
        's'
    } else {
        '-'
    };
    format_unix_mode(kind, meta.permissions().mode())
}

/// Windows exposes only the directory bit and read-only flag.
#[cfg(not(unix))]
pub fn mode_string(meta: &Metadata) -> String {
    readonly_flag_mode(meta.is_dir(), meta.permissions().readonly())
}

/// Mode string synthesized from a directory bit and a read-only flag.
/// Directories always carry the execute bits.
pub fn readonly_flag_mode(is_dir: bool, readonly: bool) -> String {
    let (kind, exec) = if is_dir { ('d', 0o111) } else { ('-', 0) };
    let write = if readonly { 0 } else { 0o222 };
    format_unix_mode(kind, 0o444 | write | exec)
}

/// Render the permission bits of `mode` after the `kind` character.
pub fn format_unix_mode(kind: char, mode: u32) -> String {
    const SETUID: u32 = 0o4000;
    const SETGID: u32 = 0o2000;
    const STICKY: u32 = 0o1000;

    let mut out = String::with_capacity(10);
    out.push(kind);

    let special = [(SETUID, 's'), (SETGID, 's'), (STICKY, 't')];
    for (i, (bit, marker)) in special.iter().enumerate() {
        let shift = 6 - 3 * i as u32;
        let triplet = (mode >> shift) & 0o7;
        out.push(if triplet & 0o4 != 0 { 'r' } else { '-' });
        out.push(if triplet & 0o2 != 0 { 'w' } else { '-' });
        let exec = triplet & 0o1 != 0;
        out.push(match (mode & bit != 0, exec) {
            (true, true) => *marker,
            (true, false) => marker.to_ascii_uppercase(),
            (false, true) => 'x',
            (false, false) => '-',
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::LegacyEncodingPlatform;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_unix_mode_plain() {
        assert_eq!(format_unix_mode('-', 0o644), "-rw-r--r--");
        assert_eq!(format_unix_mode('d', 0o755), "drwxr-xr-x");
        assert_eq!(format_unix_mode('-', 0o000), "----------");
    }

    #[test]
    fn test_format_unix_mode_special_bits() {
        assert_eq!(format_unix_mode('-', 0o4755), "-rwsr-xr-x");
        assert_eq!(format_unix_mode('-', 0o4644), "-rwSr--r--");
        assert_eq!(format_unix_mode('-', 0o2755), "-rwxr-sr-x");
        assert_eq!(format_unix_mode('d', 0o1777), "drwxrwxrwt");
        assert_eq!(format_unix_mode('d', 0o1776), "drwxrwxrwT");
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension(Path::new("a.txt")), ".txt");
        assert_eq!(extension(Path::new("dir/archive.tar.gz")), ".gz");
        assert_eq!(extension(Path::new("Makefile")), "");
        assert_eq!(extension(Path::new("file.")), ".");
    }

    #[test]
    fn test_extension_of_dotfiles() {
        assert_eq!(extension(Path::new(".bashrc")), ".bashrc");
        assert_eq!(extension(Path::new("x/.env")), ".env");
        assert_eq!(extension(Path::new("x/.config.bak")), ".bak");
    }

    #[test]
    fn test_readonly_flag_mode() {
        assert_eq!(readonly_flag_mode(false, false), "-rw-rw-rw-");
        assert_eq!(readonly_flag_mode(false, true), "-r--r--r--");
        assert_eq!(readonly_flag_mode(true, false), "drwxrwxrwx");
        assert_eq!(readonly_flag_mode(true, true), "dr-xr-xr-x");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("dir/a.txt")), "a.txt");
        assert_eq!(file_name(Path::new("a.txt")), "a.txt");
        assert_eq!(file_name(Path::new("..")), "..");
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_is_cleaned() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_path(Path::new("./a/../b.txt")), cwd.join("b.txt"));
        assert_eq!(absolute_path(Path::new("/x/./y//z")), PathBuf::from("/x/y/z"));
    }

    #[test]
    fn test_format_mtime_shape() {
        let formatted = format_mtime(SystemTime::now());
        assert_eq!(formatted.len(), "YYYY-MM-DD HH:MM".len());
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn test_collect_regular_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "0123456789").unwrap();

        let mut diagnostics = Vec::new();
        let record = FileRecord::collect(&path, &LegacyEncodingPlatform::default(), &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert_eq!(record.size, "10");
        assert_eq!(record.extension, ".txt");
        assert_eq!(record.name, "a.txt");
        assert!(record.mode.starts_with('-'));
        assert_eq!(record.full_path, absolute_path(&path).to_string_lossy());
        assert_eq!(record.link_target, "");
        assert_eq!(record.owner, "");
        assert_eq!(record.group, "");
    }

    #[test]
    fn test_collect_missing_file_is_blank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let mut diagnostics = Vec::new();
        let record = FileRecord::collect(&path, &LegacyEncodingPlatform::default(), &mut diagnostics);

        assert_eq!(record, FileRecord::default());
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(diagnostics[0], EntryError::Stat { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_symlink_resolves_target() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target.txt");
        fs::write(&target, "abc").unwrap();
        let link = dir.path().join("link");
        symlink(&target, &link).unwrap();

        let mut diagnostics = Vec::new();
        let record = FileRecord::collect(&link, &LegacyEncodingPlatform::default(), &mut diagnostics);

        assert!(diagnostics.is_empty());
        let expected = fs::canonicalize(&target).unwrap();
        assert_eq!(record.link_target, expected.to_string_lossy());
        // Stat follows the link, so mode and size describe the target.
        assert!(record.mode.starts_with('-'));
        assert_eq!(record.size, "3");
        assert_eq!(record.name, "link");
    }

    #[cfg(unix)]
    #[test]
    fn test_link_target_of_regular_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain");
        fs::write(&path, "").unwrap();
        assert!(link_target(&path, &path).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_link_target_dangling_is_error() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let link = dir.path().join("dangling");
        symlink(dir.path().join("nowhere"), &link).unwrap();

        let err = link_target(&link, &link).unwrap_err();
        assert!(matches!(err, EntryError::ResolveLink { .. }));
    }
}
