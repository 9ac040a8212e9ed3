//! List operation - the task table.

use gantry_plan::{TaskRegistry, Variant};

use crate::reports::{ListReport, TaskRow};

/// Build the task table, narrowed to `variant` when given.
pub fn list(registry: &TaskRegistry, variant: Option<Variant>) -> ListReport {
    let tasks = registry
        .iter()
        .filter(|task| variant.is_none_or(|v| task.supports(v)))
        .map(|task| TaskRow {
            name: task.name,
            about: task.about,
            default: task.default,
            variants: task.variants(),
        })
        .collect();

    ListReport { variant, tasks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tasks_without_variant() {
        let registry = TaskRegistry::new();
        let report = list(&registry, None);
        assert_eq!(report.tasks.len(), registry.iter().count());
        assert_eq!(report.tasks[0].name, "git-init");
    }

    #[test]
    fn test_minimal_hides_database_tasks() {
        let report = list(&TaskRegistry::new(), Some(Variant::Minimal));
        let names: Vec<_> = report.tasks.iter().map(|t| t.name).collect();

        assert!(names.contains(&"run-server"));
        assert!(!names.contains(&"create-env"));
        assert!(!names.contains(&"docker-compose"));
        assert!(!names.contains(&"docker-db"));
    }
}
