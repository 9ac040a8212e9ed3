use thiserror::Error;

use crate::Variant;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown task '{name}' (available: {})", .available.join(", "))]
    UnknownTask {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("task '{name}' is not available for the {variant} variant")]
    UnsupportedTask { name: String, variant: Variant },

    #[error("task '{task}' failed at step {} ({step})", .index + 1)]
    Step {
        task: &'static str,
        /// Zero-based position in the task's plan
        index: usize,
        step: String,
        #[source]
        source: gantry_core::Error,
    },
}
