use std::{fmt, path::PathBuf};

use gantry_core::{ExternalCommand, Overwrite};
use serde::Serialize;

use crate::Template;

/// A single unit of scaffold work. Paths are relative to the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Step {
    /// Create a directory (and any missing parents)
    MakeDirectory { path: PathBuf },
    /// Write a template to a file
    WriteFile {
        path: PathBuf,
        template: Template,
        mode: Overwrite,
    },
    /// Run an external program in the target directory
    RunCommand { command: ExternalCommand },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::MakeDirectory { path } => write!(f, "mkdir {}", path.display()),
            Step::WriteFile { path, mode, .. } => {
                let mode = match mode {
                    Overwrite::Always => "overwrite",
                    Overwrite::IfMissing => "if missing",
                    Overwrite::Append => "append",
                };
                write!(f, "write {} ({})", path.display(), mode)
            }
            Step::RunCommand { command } => write!(f, "run {}", command),
        }
    }
}
