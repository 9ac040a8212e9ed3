use std::{fmt, io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    CreateDir,
    Read,
    Write,
    Append,
    Inspect,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IoOp::CreateDir => "create directory",
            IoOp::Read => "read",
            IoOp::Write => "write",
            IoOp::Append => "append to",
            IoOp::Inspect => "inspect",
        };
        f.write_str(s)
    }
}

/// Errors raised while touching the filesystem or running external commands.
///
/// "Already exists" is never an error here; it is reported through
/// [`DirResult`](crate::DirResult) and [`WriteResult`](crate::WriteResult).
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to {op} '{}'", .path.display())]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' exists but is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{}", describe_missing(.program))]
    ProgramNotFound { program: String },

    #[error("failed to start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

fn describe_missing(program: &str) -> String {
    if program.starts_with("venv/") {
        format!(
            "'{program}' does not exist, create the virtualenv first (gantry run create-venv)"
        )
    } else if program.contains('/') {
        format!("'{program}' does not exist")
    } else {
        format!("program '{program}' was not found on PATH")
    }
}

impl Error {
    pub(crate) fn io(op: IoOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_operation_and_path() {
        let err = Error::io(
            IoOp::CreateDir,
            "app/api",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.to_string(), "failed to create directory 'app/api'");
    }

    #[test]
    fn test_program_not_found_message() {
        let missing = |program: &str| {
            Error::ProgramNotFound {
                program: program.to_string(),
            }
            .to_string()
        };
        assert_eq!(missing("git"), "program 'git' was not found on PATH");
        assert_eq!(
            missing("venv/bin/pip"),
            "'venv/bin/pip' does not exist, create the virtualenv first (gantry run create-venv)"
        );
        assert_eq!(missing("./tools/lint"), "'./tools/lint' does not exist");
    }

    #[test]
    fn test_command_failed_message() {
        let err = Error::CommandFailed {
            command: "git init".to_string(),
            code: Some(128),
        };
        assert_eq!(err.to_string(), "`git init` exited with status 128");

        let err = Error::CommandFailed {
            command: "git init".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "`git init` exited with a signal");
    }
}
