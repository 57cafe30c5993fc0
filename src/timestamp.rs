//! Modification time capture and restore
//!
//! Only mtime is handled. Access time is left alone: it is unreliable on
//! network filesystems and nothing downstream depends on it.

use crate::error::WrapperError;
use std::fs::{self, File, FileTimes, OpenOptions};
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Read the modification time of `path`.
///
/// A path that cannot be stat'ed is reported as missing.
pub fn capture(path: &Path) -> Result<SystemTime, WrapperError> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|_| WrapperError::FileNotFound(path.to_path_buf()))
}

/// Force the modification time of `path` back to `mtime`.
///
/// Best effort: a failure to set the time is ignored.
pub fn restore(path: &Path, mtime: SystemTime) {
    let _ = set_mtime(path, mtime);
}

fn set_mtime(path: &Path, mtime: SystemTime) -> io::Result<()> {
    let file = open_for_times(path)?;
    file.set_times(FileTimes::new().set_modified(mtime))
}

// futimens only needs ownership, SetFileTime needs a writable handle
#[cfg(unix)]
fn open_for_times(path: &Path) -> io::Result<File> {
    OpenOptions::new().read(true).open(path)
}

#[cfg(not(unix))]
fn open_for_times(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).open(path)
}
