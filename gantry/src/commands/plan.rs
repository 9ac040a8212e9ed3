use std::path::Path;

use clap::Args;
use eyre::{Result, WrapErr};
use gantry_plan::{ScaffoldSettings, TaskRegistry};

use super::SettingsArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PlanCommand {
    /// Tasks to expand (defaults to every default task of the variant)
    pub tasks: Vec<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanCommand {
    pub fn run(&self, dir: &Path) -> Result<()> {
        let settings = self.settings.resolve(dir);
        Self::render(&TaskRegistry::new(), &settings, &self.tasks, self.json)
    }

    pub(super) fn render(
        registry: &TaskRegistry,
        settings: &ScaffoldSettings,
        tasks: &[String],
        json: bool,
    ) -> Result<()> {
        let report = ops::plan(registry, settings, tasks)?;

        if json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize plan")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
