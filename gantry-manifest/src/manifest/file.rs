use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a gantry.toml file with both raw content and parsed manifest.
pub struct GantryToml {
    path: PathBuf,
    manifest: Manifest,
}

impl GantryToml {
    /// Open and parse a gantry.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let manifest = Manifest::from_file(&path)?;
        Ok(Self { path, manifest })
    }

    /// Open `path` if it exists; a missing file is not an error.
    pub fn open_if_exists(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
