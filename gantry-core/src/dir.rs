use std::{fs, path::Path};

use crate::{Error, IoOp, Result};

/// Result of a directory operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirResult {
    /// Directory was created
    Created,
    /// Directory was already there
    Exists,
}

/// Make sure `path` is a directory, creating it and any missing parents.
///
/// An existing directory is not an error. An existing file at `path` is
/// [`Error::NotADirectory`], and any other failure is surfaced as [`Error::Io`].
pub fn ensure_dir(path: &Path) -> Result<DirResult> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(DirResult::Exists),
        Ok(_) => {
            return Err(Error::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(IoOp::Inspect, path, e)),
    }

    match fs::create_dir_all(path) {
        Ok(()) => Ok(DirResult::Created),
        // lost a race with another writer; still fine if it is a directory now
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && path.is_dir() => {
            Ok(DirResult::Exists)
        }
        Err(e) => Err(Error::io(IoOp::CreateDir, path, e)),
    }
}
