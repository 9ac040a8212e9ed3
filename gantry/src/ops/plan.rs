//! Plan operation - expand tasks into steps without running them.

use gantry_plan::{ScaffoldSettings, TaskRegistry};

use crate::reports::{PlanReport, PlannedTask};

/// Expand the requested tasks (or the variant's defaults) into a report.
pub fn plan(
    registry: &TaskRegistry,
    settings: &ScaffoldSettings,
    tasks: &[String],
) -> gantry_plan::Result<PlanReport> {
    let tasks = registry
        .resolve(tasks, settings.variant)?
        .into_iter()
        .map(|task| PlannedTask {
            task: task.name,
            steps: task.plan(settings),
        })
        .collect();

    Ok(PlanReport {
        variant: settings.variant,
        package: settings.package.clone(),
        tasks,
    })
}
