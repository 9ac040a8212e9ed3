//! Project layout variants.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which project layout and template set to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// `app/` tree with a bare uvicorn entry point
    Minimal,
    /// `app/` tree with exceptions, schemas, settings, middleware and ORM base
    #[default]
    Service,
    /// `<package>/` tree split into api, core, config and infra
    Hexagonal,
}

impl Variant {
    /// All variants, in display order.
    pub const ALL: [Variant; 3] = [Variant::Minimal, Variant::Service, Variant::Hexagonal];

    /// Returns the variant identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Minimal => "minimal",
            Variant::Service => "service",
            Variant::Hexagonal => "hexagonal",
        }
    }

    /// One-line description for prompts and listings.
    pub fn description(&self) -> &'static str {
        match self {
            Variant::Minimal => "FastAPI entry point and an empty package tree",
            Variant::Service => "layered FastAPI service with SQLAlchemy and Alembic",
            Variant::Hexagonal => "ports-and-adapters layout with Gino on Postgres",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" | "min" => Ok(Variant::Minimal),
            "service" | "svc" => Ok(Variant::Service),
            "hexagonal" | "hex" => Ok(Variant::Hexagonal),
            _ => Err(format!(
                "unknown variant '{}', expected 'minimal', 'service' or 'hexagonal'",
                s
            )),
        }
    }
}
