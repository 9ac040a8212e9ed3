//! Core filesystem and process primitives for the gantry scaffolder.
//!
//! Everything that touches the disk or spawns a child process lives here,
//! so the planning layer above can stay free of side effects.

mod command;
mod dir;
mod error;
mod file;
mod utils;

// External commands
#[cfg(any(test, feature = "testing"))]
pub use command::RecordingRunner;
pub use command::{CommandOutput, CommandRunner, ExternalCommand, Stdout, SystemRunner};
// Directories
pub use dir::{DirResult, ensure_dir};
// Errors
pub use error::{Error, IoOp, Result};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::to_snake_case;
