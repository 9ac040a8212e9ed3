//! Manifest types and parsing for gantry.toml files.

mod file;
mod parse;
mod variant;

pub use file::GantryToml;
use serde::Deserialize;
pub use variant::Variant;

/// Default manifest file name, looked up in the target directory.
pub const MANIFEST_FILE: &str = "gantry.toml";

/// Root manifest for gantry.toml
///
/// Every field is optional; anything left out falls back to the built-in
/// defaults of the scaffolder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project layout settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// Packages installed into the generated virtualenv
    #[serde(default)]
    pub dependencies: DependenciesConfig,
}

/// `[project]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Layout and template set
    pub variant: Option<Variant>,

    /// Root package directory (hexagonal layout only)
    pub package: Option<String>,

    /// Interpreter handed to `virtualenv -p`
    pub python: Option<String>,

    /// Port for the development server
    pub port: Option<u16>,
}

/// `[dependencies]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependenciesConfig {
    /// Requirement specifiers appended after the pinned set
    #[serde(default)]
    pub extra: Vec<String>,
}
