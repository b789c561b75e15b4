//! Filesystem access used by the walker
//!
//! The walker only ever needs two things from the filesystem: the metadata
//! of a path, and the names inside a directory. Both go through [`Probe`] so
//! the engine can be driven by something other than the real disk.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::entry::{EntryKind, StatInfo};

/// Access to path metadata and directory contents.
pub trait Probe {
    /// Stat a path, following symbolic links.
    fn probe(&self, path: &Path) -> io::Result<StatInfo>;

    /// Names inside a directory, starting with `.` and `..`.
    fn list_children(&self, dir: &Path) -> io::Result<Vec<OsString>>;
}

/// [`Probe`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl Probe for FsProbe {
    fn probe(&self, path: &Path) -> io::Result<StatInfo> {
        fs::metadata(path).map(|meta| stat_info(&meta))
    }

    fn list_children(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut names = vec![OsString::from("."), OsString::from("..")];
        // The handle is dropped when this function returns.
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }
}

/// Convert `std` metadata into the walker's own representation.
pub fn stat_info(meta: &fs::Metadata) -> StatInfo {
    let file_type = meta.file_type();
    let kind = if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    StatInfo {
        kind,
        size: meta.len(),
        accessed: meta.accessed().ok(),
        changed: changed_time(meta),
        modified: meta.modified().ok(),
    }
}

#[cfg(unix)]
fn changed_time(meta: &fs::Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let secs = meta.ctime();
    let nanos = u32::try_from(meta.ctime_nsec()).ok()?;
    if secs >= 0 {
        SystemTime::UNIX_EPOCH.checked_add(Duration::new(secs.unsigned_abs(), nanos))
    } else {
        SystemTime::UNIX_EPOCH
            .checked_sub(Duration::new(secs.unsigned_abs(), 0))?
            .checked_add(Duration::new(0, nanos))
    }
}

#[cfg(not(unix))]
fn changed_time(meta: &fs::Metadata) -> Option<SystemTime> {
    meta.created().ok()
}
