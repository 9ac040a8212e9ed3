//! gantry.toml generator used by `gantry init`.

use std::path::{Path, PathBuf};

use gantry_core::{FileRules, GeneratedFile, Overwrite};

use crate::{MANIFEST_FILE, Variant};

/// A starter gantry.toml.
pub struct GantryTomlFile {
    pub variant: Variant,
    pub package: String,
    pub python: String,
    pub port: u16,
}

impl GantryTomlFile {
    pub fn new(variant: Variant, package: impl Into<String>) -> Self {
        Self {
            variant,
            package: package.into(),
            python: "python3.7".to_string(),
            port: 5000,
        }
    }

    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

impl GeneratedFile for GantryTomlFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"[project]
# minimal | service | hexagonal
variant = "{}"
# root package directory, used by the hexagonal layout
package = "{}"
python = "{}"
port = {}

[dependencies]
# appended to the pinned package set, e.g. ["httpx==0.21.3"]
extra = []
"#,
            self.variant, self.package, self.python, self.port
        )
    }
}
