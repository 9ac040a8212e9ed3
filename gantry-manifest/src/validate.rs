//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Error, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest, so error factories can attach spans and name the
/// section they were raised from.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "gantry.toml");
/// ctx.validate_name("billing", "package")?;
///
/// let deps = ctx.push("dependencies");
/// deps.validation_error("extra package cannot be empty", "extra");
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Section path (e.g., ["dependencies"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "package in 'project'" or just "package" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a key or value in the source.
    pub fn find_span(&self, needle: &str) -> Option<SourceSpan> {
        find_span(self.source.src(), needle)
    }

    /// Create a validation error pointing at `needle`.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        self.source
            .validation_error(message, self.find_span(needle))
    }

    /// Validate that a name is a usable Python package name.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_python_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// Python reserved keywords that cannot be used as package names
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Check if a name is a Python reserved keyword
pub(crate) fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Find the span of `needle` in the TOML source.
///
/// Prefers `needle =` (a key) and `"needle"` (a string value) over a bare
/// substring match.
pub(crate) fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    let patterns = [
        (format!("{} =", needle), 0),
        (format!("{}=", needle), 0),
        (format!("\"{}\"", needle), 1),
    ];

    for (pattern, offset) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + offset, needle.len())));
        }
    }

    src.find(needle)
        .map(|pos| SourceSpan::from((pos, needle.len())))
}

/// Validate that a name is a valid Python identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if name.contains('-') {
        return Some("name cannot contain dashes, use underscores instead");
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers and underscores");
    }

    None
}
