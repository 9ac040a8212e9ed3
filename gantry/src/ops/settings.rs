//! Settings resolution: command-line flags, then gantry.toml, then defaults.

use std::path::Path;

use gantry_core::to_snake_case;
use gantry_manifest::{GantryToml, MANIFEST_FILE, ParseContext};
use gantry_plan::{ScaffoldSettings, Variant};
use tracing::debug;

/// Values given on the command line; `None` defers to the manifest.
#[derive(Debug)]
pub struct SettingsOptions<'a> {
    /// Target directory, searched for gantry.toml when `config` is unset
    pub dir: &'a Path,
    /// Explicit manifest path; must exist
    pub config: Option<&'a Path>,
    pub variant: Option<Variant>,
    pub package: Option<&'a str>,
    pub python: Option<&'a str>,
    pub port: Option<u16>,
}

impl<'a> SettingsOptions<'a> {
    pub fn new(dir: &'a Path) -> Self {
        Self {
            dir,
            config: None,
            variant: None,
            package: None,
            python: None,
            port: None,
        }
    }
}

/// Normalize a typed package name to snake_case and check it is importable.
pub fn normalize_package(raw: &str) -> gantry_manifest::Result<String> {
    let package = to_snake_case(raw);
    ParseContext::new(&package, "--package").validate_name(&package, "package")?;
    Ok(package)
}

pub fn resolve_settings(opts: &SettingsOptions) -> gantry_manifest::Result<ScaffoldSettings> {
    let manifest = match opts.config {
        Some(path) => Some(GantryToml::open(path)?),
        None => GantryToml::open_if_exists(opts.dir.join(MANIFEST_FILE))?,
    };

    let mut settings = match &manifest {
        Some(toml) => {
            debug!(path = %toml.path().display(), "loaded manifest");
            ScaffoldSettings::from_manifest(toml.manifest())
        }
        None => ScaffoldSettings::default(),
    };

    if let Some(variant) = opts.variant {
        settings.variant = variant;
    }
    if let Some(package) = opts.package {
        settings.package = normalize_package(package)?;
    }
    if let Some(python) = opts.python {
        settings.python = python.to_string();
    }
    if let Some(port) = opts.port {
        settings.port = port;
    }
    Ok(settings)
}
