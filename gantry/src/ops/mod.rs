//! Core operations.
//!
//! Business logic for gantry commands, separated from CLI argument parsing
//! and output rendering.

pub mod init;
pub mod list;
pub mod plan;
pub mod run;
pub mod settings;

pub use init::init;
pub use list::list;
pub use plan::plan;
pub use run::run;
