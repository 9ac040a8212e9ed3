//! External command model and the runner seam.

use std::{
    fmt,
    io::ErrorKind,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

/// Where a child's stdout goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "mode", content = "path")]
pub enum Stdout {
    /// Stream to the terminal
    Inherit,
    /// Collect and write to this path (relative to the working directory)
    Capture(PathBuf),
}

/// A fixed argv to run in the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
    pub stdout: Stdout,
    /// Path the command creates; once it exists the command is not rerun
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creates: Option<PathBuf>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdout: Stdout::Inherit,
            creates: None,
        }
    }

    /// Mark `path` (relative to the working directory) as this command's result.
    pub fn creates(mut self, path: impl Into<PathBuf>) -> Self {
        self.creates = Some(path.into());
        self
    }

    /// Redirect stdout into `path`.
    pub fn capture_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout = Stdout::Capture(path.into());
        self
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    /// The argv joined with spaces, without any redirection.
    pub fn command_line(&self) -> String {
        self.argv().join(" ")
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_line())?;
        if let Stdout::Capture(path) = &self.stdout {
            write!(f, " > {}", path.display())?;
        }
        Ok(())
    }
}

/// What a finished command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
    /// Collected stdout, only present for [`Stdout::Capture`]
    pub stdout: Option<Vec<u8>>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands.
///
/// A runner only reports what happened; deciding whether a non-zero exit is
/// fatal and writing captured output is the caller's job.
pub trait CommandRunner {
    fn run(&mut self, cwd: &Path, command: &ExternalCommand) -> Result<CommandOutput>;
}

/// Spawns real child processes and waits for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, cwd: &Path, command: &ExternalCommand) -> Result<CommandOutput> {
        debug!(cwd = %cwd.display(), %command, "spawning");
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).current_dir(cwd);

        let spawn_error = |e: std::io::Error| {
            if e.kind() == ErrorKind::NotFound {
                Error::ProgramNotFound {
                    program: command.program.clone(),
                }
            } else {
                Error::Spawn {
                    command: command.command_line(),
                    source: e,
                }
            }
        };

        match command.stdout {
            Stdout::Inherit => {
                let status = cmd.status().map_err(spawn_error)?;
                Ok(CommandOutput {
                    code: status.code(),
                    stdout: None,
                })
            }
            Stdout::Capture(_) => {
                let output = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::inherit())
                    .output()
                    .map_err(spawn_error)?;
                Ok(CommandOutput {
                    code: output.status.code(),
                    stdout: Some(output.stdout),
                })
            }
        }
    }
}

/// Records commands instead of spawning them.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Vec<(PathBuf, ExternalCommand)>,
    stdout: std::collections::HashMap<String, Vec<u8>>,
    failures: std::collections::HashMap<String, i32>,
}

#[cfg(any(test, feature = "testing"))]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command_line` with the given stdout.
    pub fn respond(mut self, command_line: &str, stdout: impl Into<Vec<u8>>) -> Self {
        self.stdout.insert(command_line.to_string(), stdout.into());
        self
    }

    /// Make `command_line` exit with `code`.
    pub fn fail(mut self, command_line: &str, code: i32) -> Self {
        self.failures.insert(command_line.to_string(), code);
        self
    }

    /// Every command seen so far, in order.
    pub fn commands(&self) -> Vec<&ExternalCommand> {
        self.calls.iter().map(|(_, c)| c).collect()
    }

    /// Argument vectors seen so far, in order.
    pub fn argvs(&self) -> Vec<Vec<String>> {
        self.calls
            .iter()
            .map(|(_, c)| c.argv().into_iter().map(str::to_string).collect())
            .collect()
    }

    /// Working directories seen so far, in order.
    pub fn cwds(&self) -> Vec<&Path> {
        self.calls.iter().map(|(p, _)| p.as_path()).collect()
    }
}

#[cfg(any(test, feature = "testing"))]
impl CommandRunner for RecordingRunner {
    fn run(&mut self, cwd: &Path, command: &ExternalCommand) -> Result<CommandOutput> {
        self.calls.push((cwd.to_path_buf(), command.clone()));
        let line = command.command_line();
        let code = self.failures.get(&line).copied().unwrap_or(0);
        let stdout = match command.stdout {
            Stdout::Inherit => None,
            Stdout::Capture(_) => Some(self.stdout.get(&line).cloned().unwrap_or_default()),
        };
        Ok(CommandOutput {
            code: Some(code),
            stdout,
        })
    }
}
