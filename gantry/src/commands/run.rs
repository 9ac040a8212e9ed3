use std::path::Path;

use clap::Args;
use eyre::Result;
use gantry_core::SystemRunner;
use gantry_plan::TaskRegistry;

use super::{SettingsArgs, plan::PlanCommand};
use crate::{
    ops::{self, run::RunOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RunCommand {
    /// Tasks to run, in order (defaults to every default task of the variant)
    pub tasks: Vec<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print the plan instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

impl RunCommand {
    pub fn run(&self, dir: &Path) -> Result<()> {
        let settings = self.settings.resolve(dir);
        let registry = TaskRegistry::new();

        if self.dry_run {
            return PlanCommand::render(&registry, &settings, &self.tasks, false);
        }

        let mut report = ops::run(
            &registry,
            &settings,
            &self.tasks,
            RunOptions {
                root: dir,
                runner: SystemRunner,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        match report.error.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}
