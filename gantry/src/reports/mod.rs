//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod init;
mod list;
mod output;
mod plan;
mod run;

pub use init::InitReport;
pub use list::{ListReport, TaskRow};
pub use output::{Report, TerminalOutput};
pub use plan::{PlanReport, PlannedTask};
pub use run::RunReport;

#[cfg(test)]
pub use output::render_to_string;
