use gantry_manifest::Manifest;

use crate::Variant;

/// Inputs that shape a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    pub variant: Variant,
    /// Root package directory for the hexagonal layout
    pub package: String,
    /// Interpreter passed to `virtualenv -p`
    pub python: String,
    /// Development server port
    pub port: u16,
    /// Requirement specifiers installed after the pinned set
    pub extra_packages: Vec<String>,
}

impl ScaffoldSettings {
    pub const DEFAULT_PACKAGE: &'static str = "project_name";
    pub const DEFAULT_PYTHON: &'static str = "python3.7";
    pub const DEFAULT_PORT: u16 = 5000;

    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Settings from a manifest, with defaults for anything it leaves out.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let project = &manifest.project;
        let defaults = Self::default();
        Self {
            variant: project.variant.unwrap_or(defaults.variant),
            package: project.package.clone().unwrap_or(defaults.package),
            python: project.python.clone().unwrap_or(defaults.python),
            port: project.port.unwrap_or(defaults.port),
            extra_packages: manifest.dependencies.extra.clone(),
        }
    }
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            package: Self::DEFAULT_PACKAGE.to_string(),
            python: Self::DEFAULT_PYTHON.to_string(),
            port: Self::DEFAULT_PORT,
            extra_packages: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_from_empty_manifest_uses_defaults() {
        let settings = ScaffoldSettings::from_manifest(&Manifest::default());
        assert_eq!(settings, ScaffoldSettings::default());
    }

    #[test]
    fn test_from_manifest_overrides() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            variant = "hexagonal"
            port = 8080

            [dependencies]
            extra = ["httpx==0.21.3"]
            "#,
        )
        .unwrap();

        let settings = ScaffoldSettings::from_manifest(&manifest);

        assert_eq!(settings.variant, Variant::Hexagonal);
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.package, "project_name");
        assert_eq!(settings.python, "python3.7");
        assert_eq!(settings.extra_packages, vec!["httpx==0.21.3"]);
    }
}
