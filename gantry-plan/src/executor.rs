//! Applies scaffold plans to a target directory.

use std::path::PathBuf;

use gantry_core::{
    CommandRunner, DirResult, ExternalCommand, File, Overwrite, Stdout, WriteResult, ensure_dir,
};
use tracing::{debug, info};

use crate::{Error, Result, ScaffoldPlan, Step};

/// What a single step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Directory { path: PathBuf, result: DirResult },
    File { path: PathBuf, result: WriteResult },
    Command { command: ExternalCommand },
    /// Not run because the path it creates is already there
    CommandSkipped { command: ExternalCommand },
}

/// Steps completed by one task, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub task: &'static str,
    pub steps: Vec<StepOutcome>,
}

/// Runs plans top to bottom, stopping at the first error.
///
/// Outcomes are kept for every step that completed, including the ones that
/// ran before a failure, so callers can report partial progress.
pub struct Executor<R> {
    root: PathBuf,
    runner: R,
    log: Vec<TaskOutcome>,
}

impl<R: CommandRunner> Executor<R> {
    pub fn new(root: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            root: root.into(),
            runner,
            log: Vec::new(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Outcomes recorded so far.
    pub fn log(&self) -> &[TaskOutcome] {
        &self.log
    }

    pub fn into_log(self) -> Vec<TaskOutcome> {
        self.log
    }

    /// Run every step of `plan` on behalf of `task`.
    pub fn run_task(&mut self, task: &'static str, plan: &ScaffoldPlan) -> Result<()> {
        info!(task, steps = plan.len(), "running task");
        self.log.push(TaskOutcome {
            task,
            steps: Vec::with_capacity(plan.len()),
        });

        for (index, step) in plan.steps().iter().enumerate() {
            let outcome = self.run_step(step).map_err(|source| Error::Step {
                task,
                index,
                step: step.to_string(),
                source,
            })?;
            if let Some(current) = self.log.last_mut() {
                current.steps.push(outcome);
            }
        }
        Ok(())
    }

    fn run_step(&mut self, step: &Step) -> gantry_core::Result<StepOutcome> {
        match step {
            Step::MakeDirectory { path } => {
                let result = ensure_dir(&self.root.join(path))?;
                debug!(path = %path.display(), ?result, "directory");
                Ok(StepOutcome::Directory {
                    path: path.clone(),
                    result,
                })
            }
            Step::WriteFile {
                path,
                template,
                mode,
            } => {
                let result = File::new(self.root.join(path), template.body())
                    .overwrite(*mode)
                    .write()?;
                debug!(path = %path.display(), template = template.name(), ?result, "file");
                Ok(StepOutcome::File {
                    path: path.clone(),
                    result,
                })
            }
            Step::RunCommand { command } => {
                let done = command.creates.as_ref().filter(|p| self.root.join(p).exists());
                if let Some(creates) = done {
                    info!(%command, creates = %creates.display(), "already done, skipping");
                    return Ok(StepOutcome::CommandSkipped {
                        command: command.clone(),
                    });
                }
                info!(%command, "running command");
                let output = self.runner.run(&self.root, command)?;
                if !output.success() {
                    return Err(gantry_core::Error::CommandFailed {
                        command: command.command_line(),
                        code: output.code,
                    });
                }
                if let (Stdout::Capture(path), Some(stdout)) = (&command.stdout, output.stdout) {
                    let content = String::from_utf8_lossy(&stdout).into_owned();
                    File::new(self.root.join(path), content)
                        .overwrite(Overwrite::Always)
                        .write()?;
                    debug!(path = %path.display(), bytes = stdout.len(), "captured stdout");
                }
                Ok(StepOutcome::Command {
                    command: command.clone(),
                })
            }
        }
    }
}
