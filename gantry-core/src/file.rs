use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{Error, IoOp, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        apply(&self.path(base), &self.render(), self.rules().overwrite)
    }
}

fn apply(path: &Path, content: &str, overwrite: Overwrite) -> Result<WriteResult> {
    match overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing => {
            if path.exists() {
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
        Overwrite::Append => {
            if !path.exists() {
                write_file(path, content)?;
                return Ok(WriteResult::Written);
            }
            // Bytes, not a String: user files need not be UTF-8.
            let existing = fs::read(path).map_err(|e| Error::io(IoOp::Read, path, e))?;
            if contains(&existing, content.as_bytes()) {
                return Ok(WriteResult::Skipped);
            }
            if existing.is_empty() || existing.ends_with(b"\n") {
                append_file(path, content)?;
            } else {
                append_file(path, &format!("\n{content}"))?;
            }
            Ok(WriteResult::Appended)
        }
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(IoOp::CreateDir, parent, e))?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    create_parent(path)?;
    fs::write(path, content).map_err(|e| Error::io(IoOp::Write, path, e))
}

fn append_file(path: &Path, content: &str) -> Result<()> {
    let append = || -> io::Result<()> {
        let mut file = fs::OpenOptions::new().append(true).open(path)?;
        file.write_all(content.as_bytes())
    };
    append().map_err(|e| Error::io(IoOp::Append, path, e))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// Content was appended to an existing file
    Appended,
    /// File was skipped (already exists, or already holds the content)
    Skipped,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the overwrite rule
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.rules.overwrite = overwrite;
        self
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        apply(&self.path, &self.content, self.rules.overwrite)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overwrite {
    /// Always overwrite (settings the tool owns, like `.env`)
    Always,
    /// Only create if file doesn't exist (boilerplate the user will edit)
    IfMissing,
    /// Append unless the file already contains the content (`.gitignore`)
    Append,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.py");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "should not write")
            .overwrite(Overwrite::IfMissing)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.py");

        let result = File::new(&path, "new content")
            .overwrite(Overwrite::IfMissing)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_append_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");

        let result = File::new(&path, "venv/\n")
            .overwrite(Overwrite::Append)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "venv/\n");
    }

    #[test]
    fn test_append_keeps_existing_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, "/node_modules\n").unwrap();

        let result = File::new(&path, "venv/\n")
            .overwrite(Overwrite::Append)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Appended);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "/node_modules\nvenv/\n"
        );
    }

    #[test]
    fn test_append_starts_on_a_new_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, "/dist").unwrap();

        File::new(&path, "venv/\n")
            .overwrite(Overwrite::Append)
            .write()
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "/dist\nvenv/\n");
    }

    #[test]
    fn test_append_to_latin1_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, b"caf\xe9/\n").unwrap();
        let file = File::new(&path, "venv/\n").overwrite(Overwrite::Append);

        assert_eq!(file.write().unwrap(), WriteResult::Appended);
        assert_eq!(file.write().unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read(&path).unwrap(), b"caf\xe9/\nvenv/\n");
    }

    #[test]
    fn test_append_twice_does_not_duplicate() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        let file = File::new(&path, "venv/\n.env\n").overwrite(Overwrite::Append);

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "venv/\n.env\n");
    }

    #[test]
    fn test_write_into_file_parent_surfaces_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("app");
        fs::write(&blocker, "not a dir").unwrap();

        let err = File::new(blocker.join("main.py"), "x").write().unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
    }
}
