//! Plan command report.

use gantry_plan::{ScaffoldPlan, Step, Variant};
use serde::Serialize;

use super::output::{Output, Report};

/// One task expanded into its steps.
#[derive(Debug, Serialize)]
pub struct PlannedTask {
    pub task: &'static str,
    pub steps: ScaffoldPlan,
}

/// The steps `gantry run` would take, without taking them.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub variant: Variant,
    pub package: String,
    pub tasks: Vec<PlannedTask>,
}

impl PlanReport {
    pub fn step_count(&self) -> usize {
        self.tasks.iter().map(|t| t.steps.len()).sum()
    }
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("variant", self.variant.as_str());
        if self.variant == Variant::Hexagonal {
            out.key_value("package", &self.package);
        }
        out.newline();

        for task in &self.tasks {
            out.section(task.task);
            for step in &task.steps {
                match step {
                    Step::RunCommand { command } => out.command_item(&command.to_string()),
                    other => out.list_item(&other.to_string()),
                }
            }
        }

        out.newline();
        out.preformatted(&format!(
            "{} steps in {} tasks",
            self.step_count(),
            self.tasks.len()
        ));
    }
}
