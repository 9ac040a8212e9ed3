//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{MANIFEST_FILE, Manifest};
use crate::{Error, Result, error::SourceContext, validate::ParseContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a gantry.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a gantry.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let project = &manifest.project;

    if let Some(package) = &project.package {
        ctx.validate_name(package, "package")?;
    }

    if let Some(python) = &project.python {
        if python.trim().is_empty() {
            return Err(ctx.validation_error("python interpreter cannot be empty", "python"));
        }
    }

    if project.port == Some(0) {
        return Err(ctx.validation_error("port must be between 1 and 65535", "port"));
    }

    let deps = ctx.push("dependencies");
    for spec in &manifest.dependencies.extra {
        if spec.trim().is_empty() {
            return Err(deps.validation_error("extra package cannot be empty", "extra"));
        }
        if spec.chars().any(char::is_whitespace) {
            return Err(deps.validation_error(
                format!("extra package '{}' must not contain whitespace", spec),
                spec,
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    #[test]
    fn test_empty_manifest_is_all_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert_eq!(manifest.project.variant, None);
        assert_eq!(manifest.project.package, None);
        assert!(manifest.dependencies.extra.is_empty());
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            variant = "hexagonal"
            package = "billing"
            python = "python3.10"
            port = 8080

            [dependencies]
            extra = ["httpx==0.21.3", "structlog"]
            "#,
        )
        .unwrap();

        assert_eq!(manifest.project.variant, Some(Variant::Hexagonal));
        assert_eq!(manifest.project.package.as_deref(), Some("billing"));
        assert_eq!(manifest.project.python.as_deref(), Some("python3.10"));
        assert_eq!(manifest.project.port, Some(8080));
        assert_eq!(manifest.dependencies.extra, vec!["httpx==0.21.3", "structlog"]);
    }

    #[test]
    fn test_unknown_variant_is_parse_error() {
        let err = Manifest::from_str("[project]\nvariant = \"django\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = Manifest::from_str("[project]\nframework = \"flask\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_keyword_package_rejected() {
        let err = Manifest::from_str("[project]\npackage = \"lambda\"\n").unwrap_err();
        match *err {
            Error::ReservedKeyword { name, span, .. } => {
                assert_eq!(name, "lambda");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dashed_package_rejected() {
        let err = Manifest::from_str("[project]\npackage = \"billing-service\"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = Manifest::from_str("[project]\nport = 0\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_blank_python_rejected() {
        let err = Manifest::from_str("[project]\npython = \"  \"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_extra_with_whitespace_rejected() {
        let err =
            Manifest::from_str("[dependencies]\nextra = [\"httpx ==0.21\"]\n").unwrap_err();
        match *err {
            Error::Validation { message, .. } => assert!(message.contains("httpx ==0.21")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
