//! Init operation - write a starter gantry.toml.

use std::path::Path;

use gantry_core::GeneratedFile;
use gantry_manifest::GantryTomlFile;
use gantry_plan::{ScaffoldSettings, Variant};

use super::settings::normalize_package;
use crate::reports::InitReport;

/// Options for the init operation.
pub struct InitOptions<'a> {
    pub dir: &'a Path,
    pub variant: Variant,
    /// Already normalized, see [`package_name`]
    pub package: String,
    pub python: Option<String>,
    pub port: Option<u16>,
}

/// The package to record, normalized the same way `run --package` is.
pub fn package_name(raw: Option<&str>) -> gantry_manifest::Result<String> {
    normalize_package(raw.unwrap_or(ScaffoldSettings::DEFAULT_PACKAGE))
}

/// Write `gantry.toml` into the target directory unless one exists.
pub fn init(opts: InitOptions) -> eyre::Result<InitReport> {
    let mut file = GantryTomlFile::new(opts.variant, opts.package);
    if let Some(python) = opts.python {
        file = file.with_python(python);
    }
    if let Some(port) = opts.port {
        file = file.with_port(port);
    }
    let result = file.write(opts.dir)?;

    Ok(InitReport {
        path: file.path(opts.dir),
        variant: opts.variant,
        result,
    })
}
