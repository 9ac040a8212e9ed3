//! Directory trees and boilerplate for each variant.

use std::path::Path;

use gantry_core::Overwrite::IfMissing;

use crate::{
    ScaffoldPlan, ScaffoldSettings, Variant,
    templates::{hexagonal, minimal, service},
};

/// Top-level packages under `app/`.
const APP_PACKAGES: &[&str] = &["api", "core", "db", "test", "utils", "it", "static"];

/// Nested packages under `app/`, keyed by parent.
const APP_SUBPACKAGES: &[(&str, &[&str])] = &[
    (
        "api",
        &["controller", "service", "schema", "exceptions", "security", "tasks"],
    ),
    ("test", &["api", "resources"]),
    ("core", &["localization", "settings"]),
];

/// The package tree and boilerplate files for the configured variant.
pub fn project_tree(settings: &ScaffoldSettings) -> ScaffoldPlan {
    match settings.variant {
        Variant::Minimal => {
            let mut plan = app_tree();
            plan.file("app/main.py", minimal::MAIN, IfMissing);
            plan
        }
        Variant::Service => {
            let mut plan = app_tree();
            plan.file("app/main.py", service::MAIN, IfMissing)
                .file(
                    "app/api/exceptions/generic_exception.py",
                    service::GENERIC_EXCEPTION,
                    IfMissing,
                )
                .file("app/api/schema/generic_schema.py", service::GENERIC_SCHEMA, IfMissing)
                .file("app/core/settings/config.py", service::SETTINGS, IfMissing)
                .file("app/utils/middleware.py", service::MIDDLEWARE, IfMissing)
                .file("app/db/base.py", service::DB_BASE, IfMissing)
                .file("app/db/session.py", service::DB_SESSION, IfMissing);
            plan
        }
        Variant::Hexagonal => hexagonal_tree(Path::new(&settings.package)),
    }
}

fn app_tree() -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    let root = Path::new("app");
    plan.package(root);

    for name in APP_PACKAGES {
        let dir = root.join(name);
        plan.package(&dir);

        let children = APP_SUBPACKAGES
            .iter()
            .find(|(parent, _)| parent == name)
            .map_or(&[][..], |(_, children)| *children);
        for child in children {
            plan.package(dir.join(child));
        }
    }
    plan
}

fn hexagonal_tree(root: &Path) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new();
    let api = root.join("api");
    let core = root.join("core");
    let utils = core.join("utils");
    let config = root.join("config");
    let infra = root.join("infra");
    let database = infra.join("database");

    plan.package("tests").package(root);

    plan.package(&api)
        .package_with(api.join("routers"), hexagonal::ROUTERS)
        .file(api.join("app.py"), hexagonal::APP, IfMissing);

    plan.package(&core)
        .package(core.join("settings"))
        .package(&utils)
        .file(utils.join("generic_exception.py"), hexagonal::GENERIC_EXCEPTION, IfMissing)
        .file(utils.join("generic_schema.py"), hexagonal::GENERIC_SCHEMA, IfMissing)
        .file(utils.join("headers.py"), hexagonal::HEADERS, IfMissing)
        .file(utils.join("helper.py"), hexagonal::HELPER, IfMissing)
        .file(utils.join("types.py"), hexagonal::TYPES, IfMissing);

    plan.package(&config)
        .file(config.join("environment.py"), hexagonal::ENVIRONMENT, IfMissing);

    plan.package(&infra).package(&database);
    for name in ["alembic", "models", "repositories"] {
        plan.package(database.join(name));
    }
    plan.file(database.join("gino.py"), hexagonal::GINO, IfMissing);

    plan
}
