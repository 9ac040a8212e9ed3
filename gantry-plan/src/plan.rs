use std::path::{Path, PathBuf};

use gantry_core::{ExternalCommand, Overwrite};
use serde::Serialize;

use crate::{Step, Template};

/// An ordered list of steps.
///
/// Directories are pushed before anything written into them; the builder
/// methods keep that order by construction when used top-down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScaffoldPlan {
    steps: Vec<Step>,
}

impl ScaffoldPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory.
    pub fn dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.steps.push(Step::MakeDirectory { path: path.into() });
        self
    }

    /// Create a directory with an empty `__init__.py`.
    pub fn package(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.package_with(path, Template::EMPTY)
    }

    /// Create a directory whose `__init__.py` holds `init`.
    pub fn package_with(&mut self, path: impl Into<PathBuf>, init: Template) -> &mut Self {
        let path = path.into();
        let init_path = path.join("__init__.py");
        self.dir(path).file(init_path, init, Overwrite::IfMissing)
    }

    /// Write a template to `path`.
    pub fn file(
        &mut self,
        path: impl Into<PathBuf>,
        template: Template,
        mode: Overwrite,
    ) -> &mut Self {
        self.steps.push(Step::WriteFile {
            path: path.into(),
            template,
            mode,
        });
        self
    }

    /// Run an external command.
    pub fn command(&mut self, command: ExternalCommand) -> &mut Self {
        self.steps.push(Step::RunCommand { command });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Directories the plan creates, in order.
    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.steps.iter().filter_map(|step| match step {
            Step::MakeDirectory { path } => Some(path.as_path()),
            _ => None,
        })
    }

    /// Files the plan writes, in order.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &Template)> {
        self.steps.iter().filter_map(|step| match step {
            Step::WriteFile { path, template, .. } => Some((path.as_path(), template)),
            _ => None,
        })
    }

    /// External commands the plan runs, in order.
    pub fn commands(&self) -> impl Iterator<Item = &ExternalCommand> {
        self.steps.iter().filter_map(|step| match step {
            Step::RunCommand { command } => Some(command),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a ScaffoldPlan {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
