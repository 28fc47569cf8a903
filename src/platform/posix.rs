//! POSIX provider: user/group names from the identity database

use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use nix::unistd::{Gid, Group, Uid, User};

use super::PlatformMetadata;

#[derive(Debug, Clone)]
pub struct PosixPlatform {
    home: Option<PathBuf>,
}

impl PosixPlatform {
    /// Provider for the invoking user's home directory.
    pub fn new() -> Self {
        Self::with_home(dirs::home_dir())
    }

    /// Provider collapsing `home` (if any) to `~/`.
    pub fn with_home(home: Option<PathBuf>) -> Self {
        Self { home }
    }
}

impl Default for PosixPlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// Name for `uid`, or the number itself when the lookup fails.
pub fn user_name(uid: u32) -> String {
    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => user.name,
        _ => uid.to_string(),
    }
}

/// Name for `gid`, or the number itself when the lookup fails.
pub fn group_name(gid: u32) -> String {
    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(Some(group)) => group.name,
        _ => gid.to_string(),
    }
}

/// Replace a leading `home/` in `path` with `~/`.
pub fn collapse_home(path: &str, home: &Path) -> Option<String> {
    let home = home.to_str()?.trim_end_matches('/');
    if home.is_empty() {
        return None;
    }
    let rest = path.strip_prefix(home)?.strip_prefix('/')?;
    Some(format!("~/{}", rest))
}

impl PlatformMetadata for PosixPlatform {
    fn owner_and_group(&self, meta: &Metadata) -> (String, String) {
        (user_name(meta.uid()), group_name(meta.gid()))
    }

    fn display_path(&self, absolute: &Path) -> String {
        let text = absolute.to_string_lossy();
        self.home
            .as_deref()
            .and_then(|home| collapse_home(&text, home))
            .unwrap_or_else(|| text.into_owned())
    }
}
