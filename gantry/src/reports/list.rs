//! List command report.

use gantry_plan::Variant;

use super::output::{Output, Report};

/// One row of the task table.
#[derive(Debug)]
pub struct TaskRow {
    pub name: &'static str,
    pub about: &'static str,
    pub default: bool,
    pub variants: &'static [Variant],
}

/// The task table, optionally narrowed to one variant.
#[derive(Debug)]
pub struct ListReport {
    pub variant: Option<Variant>,
    pub tasks: Vec<TaskRow>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        match self.variant {
            Some(variant) => out.section(&format!("Tasks for the {variant} variant")),
            None => out.section("Tasks"),
        }

        let width = self.tasks.iter().map(|t| t.name.len()).max().unwrap_or(0);
        for task in &self.tasks {
            let marker = if task.default { '*' } else { ' ' };
            let mut line = format!("  {marker} {:<width$}  {}", task.name, task.about);
            if self.variant.is_none() {
                let variants: Vec<&str> = task.variants.iter().map(Variant::as_str).collect();
                line.push_str(&format!(" [{}]", variants.join(", ")));
            }
            out.preformatted(&line);
        }

        out.newline();
        out.preformatted("* runs when no task is named");
    }
}
