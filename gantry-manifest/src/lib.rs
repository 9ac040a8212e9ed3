//! Parsing and validation of `gantry.toml` project configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod generate;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use generate::GantryTomlFile;
pub use manifest::{
    DependenciesConfig, GantryToml, MANIFEST_FILE, Manifest, ProjectConfig, Variant,
};
pub use validate::ParseContext;
