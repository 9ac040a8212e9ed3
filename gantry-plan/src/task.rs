//! The named tasks a user can invoke.

use gantry_core::{ExternalCommand, Overwrite};
use indexmap::IndexMap;

use crate::{
    Error, Result, ScaffoldPlan, ScaffoldSettings, Variant, install_args, project_tree,
    templates::shared,
};

const ALL: &[Variant] = &[Variant::Minimal, Variant::Service, Variant::Hexagonal];
const APP_LAYOUTS: &[Variant] = &[Variant::Minimal, Variant::Service];
const WITH_DATABASE: &[Variant] = &[Variant::Service, Variant::Hexagonal];

const PIP: &str = "venv/bin/pip";
const MIGRATIONS: &str = "app/db/migrations";

/// A named unit of scaffold work.
#[derive(Debug, Clone, Copy)]
pub struct Task {
    pub name: &'static str,
    pub about: &'static str,
    /// Part of the run when no task names are given
    pub default: bool,
    variants: &'static [Variant],
    build: fn(&ScaffoldSettings) -> ScaffoldPlan,
}

impl Task {
    /// Whether this task exists for `variant`.
    pub fn supports(&self, variant: Variant) -> bool {
        self.variants.contains(&variant)
    }

    pub fn variants(&self) -> &'static [Variant] {
        self.variants
    }

    /// Expand the task into its steps.
    pub fn plan(&self, settings: &ScaffoldSettings) -> ScaffoldPlan {
        (self.build)(settings)
    }
}

const TASKS: &[Task] = &[
    Task {
        name: "git-init",
        about: "Write .gitignore and initialize a git repository",
        default: true,
        variants: ALL,
        build: git_init,
    },
    Task {
        name: "create-directories",
        about: "Create the package tree and boilerplate sources",
        default: true,
        variants: ALL,
        build: project_tree,
    },
    Task {
        name: "create-venv",
        about: "Create a virtualenv in ./venv",
        default: true,
        variants: ALL,
        build: create_venv,
    },
    Task {
        name: "create-env",
        about: "Write the .env file with local database settings",
        default: true,
        variants: WITH_DATABASE,
        build: create_env,
    },
    Task {
        name: "install-dependencies",
        about: "Install the pinned packages into the virtualenv",
        default: true,
        variants: ALL,
        build: install_dependencies,
    },
    Task {
        name: "freeze",
        about: "Record installed packages in requirements.txt",
        default: true,
        variants: ALL,
        build: freeze,
    },
    Task {
        name: "alembic",
        about: "Initialize Alembic migrations in app/db/migrations",
        default: true,
        variants: APP_LAYOUTS,
        build: alembic,
    },
    Task {
        name: "docker-compose",
        about: "Write docker-compose.yaml for a local Postgres",
        default: true,
        variants: WITH_DATABASE,
        build: docker_compose,
    },
    Task {
        name: "docker-db",
        about: "Start the Postgres container",
        default: false,
        variants: WITH_DATABASE,
        build: docker_db,
    },
    Task {
        name: "run-server",
        about: "Start the development server with auto-reload",
        default: false,
        variants: APP_LAYOUTS,
        build: run_server,
    },
];

fn git_init(_: &ScaffoldSettings) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    plan.file(".gitignore", shared::GITIGNORE, Overwrite::Append)
        .command(ExternalCommand::new("git", ["init"]));
    plan
}

fn create_venv(settings: &ScaffoldSettings) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    plan.command(ExternalCommand::new(
        "virtualenv",
        ["-p", settings.python.as_str(), "venv"],
    ));
    plan
}

fn create_env(_: &ScaffoldSettings) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    plan.file(".env", shared::ENV, Overwrite::Always);
    plan
}

fn install_dependencies(settings: &ScaffoldSettings) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    plan.command(ExternalCommand::new(PIP, install_args(settings)));
    plan
}

fn freeze(_: &ScaffoldSettings) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    plan.command(ExternalCommand::new(PIP, ["freeze"]).capture_to("requirements.txt"));
    plan
}

fn alembic(_: &ScaffoldSettings) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    plan.command(
        ExternalCommand::new("venv/bin/alembic", ["init", MIGRATIONS]).creates(MIGRATIONS),
    );
    plan
}

fn docker_compose(_: &ScaffoldSettings) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    plan.file("docker-compose.yaml", shared::DOCKER_COMPOSE, Overwrite::IfMissing);
    plan
}

fn docker_db(_: &ScaffoldSettings) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    plan.command(ExternalCommand::new("docker-compose", ["up", "-d"]));
    plan
}

fn run_server(settings: &ScaffoldSettings) -> ScaffoldPlan {
    let port = settings.port.to_string();
    let mut plan = ScaffoldPlan::new();
    plan.command(ExternalCommand::new(
        "venv/bin/uvicorn",
        ["app.main:app", "--reload", "--port", port.as_str()],
    ));
    plan
}

/// The ordered table of built-in tasks.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    tasks: IndexMap<&'static str, Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            tasks: TASKS.iter().map(|task| (task.name, *task)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    /// All tasks in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Tasks available for `variant`, in registry order.
    pub fn for_variant(&self, variant: Variant) -> impl Iterator<Item = &Task> {
        self.iter().filter(move |task| task.supports(variant))
    }

    /// Resolve requested task names for `variant`.
    ///
    /// No names means every default task of the variant. Requested names are
    /// deduplicated and run in the order given. Validation happens up front,
    /// so an unknown or unsupported name fails before any side effect.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S], variant: Variant) -> Result<Vec<&Task>> {
        if names.is_empty() {
            return Ok(self
                .for_variant(variant)
                .filter(|task| task.default)
                .collect());
        }

        let mut selected: IndexMap<&str, &Task> = IndexMap::new();
        for name in names {
            let name = name.as_ref();
            let task = self.get(name).ok_or_else(|| Error::UnknownTask {
                name: name.to_string(),
                available: self.tasks.keys().copied().collect(),
            })?;
            if !task.supports(variant) {
                return Err(Error::UnsupportedTask {
                    name: name.to_string(),
                    variant,
                });
            }
            selected.entry(task.name).or_insert(task);
        }
        Ok(selected.into_values().collect())
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tasks: &[&Task]) -> Vec<&'static str> {
        tasks.iter().map(|t| t.name).collect()
    }

    fn argv(task: &str, settings: &ScaffoldSettings) -> Vec<Vec<String>> {
        TaskRegistry::new()
            .get(task)
            .unwrap()
            .plan(settings)
            .commands()
            .map(|c| c.argv().into_iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_default_tasks_per_variant() {
        let registry = TaskRegistry::new();
        let none: &[&str] = &[];

        assert_eq!(
            names(&registry.resolve(none, Variant::Minimal).unwrap()),
            vec![
                "git-init",
                "create-directories",
                "create-venv",
                "install-dependencies",
                "freeze",
                "alembic",
            ]
        );
        assert_eq!(
            names(&registry.resolve(none, Variant::Service).unwrap()),
            vec![
                "git-init",
                "create-directories",
                "create-venv",
                "create-env",
                "install-dependencies",
                "freeze",
                "alembic",
                "docker-compose",
            ]
        );
        assert_eq!(
            names(&registry.resolve(none, Variant::Hexagonal).unwrap()),
            vec![
                "git-init",
                "create-directories",
                "create-venv",
                "create-env",
                "install-dependencies",
                "freeze",
                "docker-compose",
            ]
        );
    }

    #[test]
    fn test_resolve_keeps_request_order_and_dedupes() {
        let registry = TaskRegistry::new();
        let tasks = registry
            .resolve(&["freeze", "git-init", "freeze"], Variant::Service)
            .unwrap();
        assert_eq!(names(&tasks), vec!["freeze", "git-init"]);
    }

    #[test]
    fn test_resolve_unknown_task() {
        let err = TaskRegistry::new()
            .resolve(&["deploy"], Variant::Service)
            .unwrap_err();
        match err {
            Error::UnknownTask { name, available } => {
                assert_eq!(name, "deploy");
                assert_eq!(available.len(), TASKS.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unsupported_task() {
        let err = TaskRegistry::new()
            .resolve(&["alembic"], Variant::Hexagonal)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedTask {
                variant: Variant::Hexagonal,
                ..
            }
        ));
    }

    #[test]
    fn test_command_argvs() {
        let settings = ScaffoldSettings::new(Variant::Minimal);

        assert_eq!(argv("git-init", &settings), vec![vec!["git", "init"]]);
        assert_eq!(
            argv("create-venv", &settings),
            vec![vec!["virtualenv", "-p", "python3.7", "venv"]]
        );
        assert_eq!(
            argv("install-dependencies", &settings),
            vec![vec!["venv/bin/pip", "install", "uvicorn", "fastapi", "alembic"]]
        );
        assert_eq!(argv("freeze", &settings), vec![vec!["venv/bin/pip", "freeze"]]);
        assert_eq!(
            argv("alembic", &settings),
            vec![vec!["venv/bin/alembic", "init", "app/db/migrations"]]
        );
        assert_eq!(
            argv("docker-db", &settings),
            vec![vec!["docker-compose", "up", "-d"]]
        );
        assert_eq!(
            argv("run-server", &settings),
            vec![vec!["venv/bin/uvicorn", "app.main:app", "--reload", "--port", "5000"]]
        );
    }

    #[test]
    fn test_alembic_is_guarded_by_its_migrations_dir() {
        let plan = TaskRegistry::new()
            .get("alembic")
            .unwrap()
            .plan(&ScaffoldSettings::default());
        let command = plan.commands().next().unwrap();
        assert_eq!(
            command.creates.as_deref(),
            Some(std::path::Path::new("app/db/migrations"))
        );
    }

    #[test]
    fn test_settings_flow_into_argv() {
        let mut settings = ScaffoldSettings::new(Variant::Service);
        settings.python = "python3.10".to_string();
        settings.port = 8080;

        assert_eq!(
            argv("create-venv", &settings),
            vec![vec!["virtualenv", "-p", "python3.10", "venv"]]
        );
        assert_eq!(
            argv("run-server", &settings)[0].last().map(String::as_str),
            Some("8080")
        );
    }

    #[test]
    fn test_every_variant_has_a_task_table_entry() {
        let registry = TaskRegistry::new();
        for variant in Variant::ALL {
            assert!(registry.for_variant(variant).count() >= 7);
        }
    }
}
