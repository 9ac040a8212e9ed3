//! Scaffold plans for gantry.
//!
//! A [`Task`] expands into a [`ScaffoldPlan`], an ordered list of [`Step`]s
//! built from static tables and embedded [`Template`]s. The [`Executor`]
//! applies a plan to a target directory.

mod error;
mod executor;
mod layout;
mod packages;
mod plan;
mod settings;
mod step;
mod task;
pub mod templates;

pub use error::{Error, Result};
pub use executor::{Executor, StepOutcome, TaskOutcome};
pub use gantry_manifest::Variant;
pub use layout::project_tree;
pub use packages::{install_args, pinned_packages};
pub use plan::ScaffoldPlan;
pub use settings::ScaffoldSettings;
pub use step::Step;
pub use task::{Task, TaskRegistry};
pub use templates::Template;
