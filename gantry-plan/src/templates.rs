//! Boilerplate templates embedded at build time.
//!
//! Each template is copied verbatim; the name is its path under `templates/`.

use std::fmt;

use serde::{Serialize, Serializer};

/// A static block of text written verbatim into a generated file.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Template {
    name: &'static str,
    body: &'static str,
}

impl Template {
    /// An empty file, used for `__init__.py` package markers.
    pub const EMPTY: Template = Template::new("empty", "");

    pub const fn new(name: &'static str, body: &'static str) -> Self {
        Self { name, body }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn body(&self) -> &'static str {
        self.body
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name)
            .field("len", &self.body.len())
            .finish()
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

macro_rules! embed {
    ($name:literal) => {
        Template::new($name, include_str!(concat!("../templates/", $name)))
    };
}

/// Files every layout shares.
pub mod shared {
    use super::Template;

    pub const GITIGNORE: Template = embed!("shared/gitignore");
    pub const ENV: Template = embed!("shared/env");
    pub const DOCKER_COMPOSE: Template = embed!("shared/docker-compose.yaml");
}

pub mod minimal {
    use super::Template;

    pub const MAIN: Template = embed!("minimal/main.py");
}

pub mod service {
    use super::Template;

    pub const MAIN: Template = embed!("service/app/main.py");
    pub const GENERIC_EXCEPTION: Template =
        embed!("service/app/api/exceptions/generic_exception.py");
    pub const GENERIC_SCHEMA: Template = embed!("service/app/api/schema/generic_schema.py");
    pub const SETTINGS: Template = embed!("service/app/core/settings/config.py");
    pub const MIDDLEWARE: Template = embed!("service/app/utils/middleware.py");
    pub const DB_BASE: Template = embed!("service/app/db/base.py");
    pub const DB_SESSION: Template = embed!("service/app/db/session.py");
}

/// Templates for the `<package>/` tree; `package` stands for the package name.
pub mod hexagonal {
    use super::Template;

    pub const APP: Template = embed!("hexagonal/package/api/app.py");
    pub const ROUTERS: Template = embed!("hexagonal/package/api/routers/__init__.py");
    pub const ENVIRONMENT: Template = embed!("hexagonal/package/config/environment.py");
    pub const GENERIC_EXCEPTION: Template =
        embed!("hexagonal/package/core/utils/generic_exception.py");
    pub const GENERIC_SCHEMA: Template = embed!("hexagonal/package/core/utils/generic_schema.py");
    pub const HEADERS: Template = embed!("hexagonal/package/core/utils/headers.py");
    pub const HELPER: Template = embed!("hexagonal/package/core/utils/helper.py");
    pub const TYPES: Template = embed!("hexagonal/package/core/utils/types.py");
    pub const GINO: Template = embed!("hexagonal/package/infra/database/gino.py");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_templates_are_not_empty() {
        let all = [
            shared::GITIGNORE,
            shared::ENV,
            shared::DOCKER_COMPOSE,
            minimal::MAIN,
            service::MAIN,
            service::GENERIC_EXCEPTION,
            service::GENERIC_SCHEMA,
            service::SETTINGS,
            service::MIDDLEWARE,
            service::DB_BASE,
            service::DB_SESSION,
            hexagonal::APP,
            hexagonal::ROUTERS,
            hexagonal::ENVIRONMENT,
            hexagonal::GENERIC_EXCEPTION,
            hexagonal::GENERIC_SCHEMA,
            hexagonal::HEADERS,
            hexagonal::HELPER,
            hexagonal::TYPES,
            hexagonal::GINO,
        ];
        for template in all {
            assert!(!template.body().is_empty(), "{} is empty", template.name());
            assert!(template.body().ends_with('\n'), "{} lacks a final newline", template.name());
        }
    }

    #[test]
    fn test_gitignore_covers_venv_and_env() {
        let lines: Vec<&str> = shared::GITIGNORE.body().lines().collect();
        assert!(lines.contains(&"venv/"));
        assert!(lines.contains(&".env"));
        assert!(lines.contains(&"__pycache__/"));
    }

    #[test]
    fn test_routers_template_defines_what_app_imports() {
        assert!(hexagonal::APP.body().contains("from api.routers import register_routers"));
        assert!(hexagonal::ROUTERS.body().contains("def register_routers("));
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&shared::ENV).unwrap();
        assert_eq!(json, r#""shared/env""#);
    }
}
