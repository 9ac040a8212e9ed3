//! Run operation - execute tasks against the target directory.

use std::path::Path;

use eyre::{Result, WrapErr};
use gantry_core::{CommandRunner, ensure_dir};
use gantry_plan::{Executor, ScaffoldSettings, TaskRegistry};
use tracing::info;

use crate::reports::RunReport;

/// Options for the run operation.
pub struct RunOptions<'a, R> {
    /// Directory the project is scaffolded into; created if missing.
    pub root: &'a Path,
    /// Runs the external commands.
    pub runner: R,
}

/// Execute the requested tasks (or the variant's defaults) in order.
///
/// Task names are validated before anything touches the filesystem. A step
/// failure does not return `Err`; it is stored in the report next to the
/// outcomes that completed before it.
pub fn run<R: CommandRunner>(
    registry: &TaskRegistry,
    settings: &ScaffoldSettings,
    tasks: &[String],
    opts: RunOptions<'_, R>,
) -> Result<RunReport> {
    let tasks = registry.resolve(tasks, settings.variant)?;

    ensure_dir(opts.root)
        .wrap_err_with(|| format!("Failed to prepare {}", opts.root.display()))?;

    let mut executor = Executor::new(opts.root, opts.runner);
    let mut error = None;
    for task in tasks {
        if let Err(e) = executor.run_task(task.name, &task.plan(settings)) {
            error = Some(e);
            break;
        }
    }
    info!(tasks = executor.log().len(), failed = error.is_some(), "run finished");

    Ok(RunReport {
        root: opts.root.to_path_buf(),
        variant: settings.variant,
        tasks: executor.into_log(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use gantry_core::RecordingRunner;
    use gantry_plan::Variant;
    use tempfile::TempDir;

    use super::*;

    fn names(tasks: &[&str]) -> Vec<String> {
        tasks.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_creates_missing_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("shop");
        let settings = ScaffoldSettings::new(Variant::Minimal);

        let report = run(
            &TaskRegistry::new(),
            &settings,
            &names(&["create-directories"]),
            RunOptions {
                root: &root,
                runner: RecordingRunner::new(),
            },
        )
        .unwrap();

        assert!(report.succeeded());
        assert!(root.join("app/main.py").is_file());
    }

    #[test]
    fn test_unknown_task_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("shop");

        let err = run(
            &TaskRegistry::new(),
            &ScaffoldSettings::default(),
            &names(&["git-init", "deploy"]),
            RunOptions {
                root: &root,
                runner: RecordingRunner::new(),
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("unknown task 'deploy'"));
        assert!(!root.exists());
    }

    #[test]
    fn test_failure_keeps_partial_outcomes() {
        let temp = TempDir::new().unwrap();
        let settings = ScaffoldSettings::new(Variant::Service);

        let report = run(
            &TaskRegistry::new(),
            &settings,
            &names(&["create-env", "create-venv", "freeze"]),
            RunOptions {
                root: temp.path(),
                runner: RecordingRunner::new().fail("virtualenv -p python3.7 venv", 1),
            },
        )
        .unwrap();

        assert!(!report.succeeded());
        let ran: Vec<_> = report.tasks.iter().map(|t| t.task).collect();
        assert_eq!(ran, vec!["create-env", "create-venv"]);
        assert_eq!(report.tasks[0].steps.len(), 1);
        assert!(temp.path().join(".env").is_file());
        assert!(!temp.path().join("requirements.txt").exists());
    }
}
