use clap::Args;
use eyre::Result;
use gantry_plan::{TaskRegistry, Variant};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Only show tasks available for this variant
    #[arg(long)]
    pub variant: Option<Variant>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::list(&TaskRegistry::new(), self.variant);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
