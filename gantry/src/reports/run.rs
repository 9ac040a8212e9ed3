//! Run command report.

use std::path::PathBuf;

use gantry_core::{DirResult, WriteResult};
use gantry_plan::{StepOutcome, TaskOutcome, Variant};

use super::output::{Output, Report};

/// What `gantry run` did, including partial progress before a failure.
#[derive(Debug)]
pub struct RunReport {
    pub root: PathBuf,
    pub variant: Variant,
    pub tasks: Vec<TaskOutcome>,
    /// Set when a step failed; later steps and tasks did not run
    pub error: Option<gantry_plan::Error>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

fn render_step(step: &StepOutcome, out: &mut dyn Output) {
    match step {
        StepOutcome::Directory { path, result } => {
            let text = format!("{}/", path.display());
            match result {
                DirResult::Created => out.added_item(&text),
                DirResult::Exists => out.unchanged_item(&text),
            }
        }
        StepOutcome::File { path, result } => {
            let path = path.display();
            match result {
                WriteResult::Written => out.added_item(&path.to_string()),
                WriteResult::Appended => out.added_item(&format!("{path} (appended)")),
                WriteResult::Skipped => out.unchanged_item(&path.to_string()),
            }
        }
        StepOutcome::Command { command } => out.command_item(&command.to_string()),
        StepOutcome::CommandSkipped { command } => {
            out.unchanged_item(&format!("{command} (already done)"))
        }
    }
}

impl Report for RunReport {
    fn render(&self, out: &mut dyn Output) {
        for task in &self.tasks {
            out.section(task.task);
            for step in &task.steps {
                render_step(step, out);
            }
        }

        if self.succeeded() {
            out.newline();
            out.preformatted(&format!(
                "Scaffolded {} project in {}",
                self.variant,
                self.root.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use gantry_core::ExternalCommand;

    use super::*;
    use crate::reports::render_to_string;

    #[test]
    fn test_render_outcomes() {
        let report = RunReport {
            root: PathBuf::from("demo"),
            variant: Variant::Service,
            tasks: vec![
                TaskOutcome {
                    task: "git-init",
                    steps: vec![
                        StepOutcome::File {
                            path: ".gitignore".into(),
                            result: WriteResult::Appended,
                        },
                        StepOutcome::Command {
                            command: ExternalCommand::new("git", ["init"]),
                        },
                    ],
                },
                TaskOutcome {
                    task: "create-directories",
                    steps: vec![
                        StepOutcome::Directory {
                            path: "app".into(),
                            result: DirResult::Exists,
                        },
                        StepOutcome::File {
                            path: "app/__init__.py".into(),
                            result: WriteResult::Skipped,
                        },
                        StepOutcome::Directory {
                            path: "app/api".into(),
                            result: DirResult::Created,
                        },
                    ],
                },
                TaskOutcome {
                    task: "alembic",
                    steps: vec![StepOutcome::CommandSkipped {
                        command: ExternalCommand::new(
                            "venv/bin/alembic",
                            ["init", "app/db/migrations"],
                        ),
                    }],
                },
            ],
            error: None,
        };

        insta::assert_snapshot!(render_to_string(&report), @r"
        git-init:
          + .gitignore (appended)
          $ git init
        create-directories:
          = app/
          = app/__init__.py
          + app/api/
        alembic:
          = venv/bin/alembic init app/db/migrations (already done)

        Scaffolded service project in demo
        ");
    }

    #[test]
    fn test_failed_run_has_no_summary() {
        let report = RunReport {
            root: PathBuf::from("demo"),
            variant: Variant::Minimal,
            tasks: vec![TaskOutcome {
                task: "create-venv",
                steps: vec![],
            }],
            error: Some(gantry_plan::Error::UnknownTask {
                name: "x".to_string(),
                available: vec![],
            }),
        };

        assert!(!report.succeeded());
        assert_eq!(render_to_string(&report), "create-venv:\n");
    }
}
