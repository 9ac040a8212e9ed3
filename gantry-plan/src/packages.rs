//! Pinned dependency sets for the generated project.

use crate::{ScaffoldSettings, Variant};

const MINIMAL: &[&str] = &["uvicorn", "fastapi", "alembic"];

const SERVICE: &[&str] = &[
    "alembic==1.7.5",
    "fastapi==0.70.1",
    "psycopg2==2.9.3",
    "pydantic==1.9.0",
    "python-dotenv==0.19.2",
    "SQLAlchemy==1.3.24",
    "starlette==0.16.0",
    "uvicorn==0.16.0",
];

const HEXAGONAL: &[&str] = &[
    "alembic==1.7.5",
    "anyio==3.4.0",
    "asgiref==3.4.1",
    "asyncpg==0.25.0",
    "autopep8==1.6.0",
    "CacheControl==0.12.10",
    "cachetools==4.2.4",
    "certifi==2021.10.8",
    "charset-normalizer==2.0.10",
    "click==8.0.3",
    "cron-validator==1.0.3",
    "fastapi==0.70.1",
    "firebase-admin==5.2.0",
    "gino==1.0.1",
    "gino-starlette==0.1.3",
    "google-api-core==2.3.2",
    "google-api-python-client==2.34.0",
    "google-auth==2.3.3",
    "google-auth-httplib2==0.1.0",
    "google-cloud-core==2.2.1",
    "google-cloud-firestore==2.3.4",
    "google-cloud-storage==1.44.0",
    "google-crc32c==1.3.0",
    "google-resumable-media==2.1.0",
    "googleapis-common-protos==1.54.0",
    "greenlet==1.1.2",
    "grpcio==1.43.0",
    "grpcio-status==1.43.0",
    "h11==0.12.0",
    "httplib2==0.20.2",
    "idna==3.3",
    "importlib-metadata==1.7.0",
    "importlib-resources==5.4.0",
    "Mako==1.1.6",
    "MarkupSafe==2.0.1",
    "msgpack==1.0.3",
    "packaging==21.3",
    "proto-plus==1.19.8",
    "protobuf==3.19.3",
    "psycopg2==2.9.3",
    "pyasn1==0.4.8",
    "pyasn1-modules==0.2.8",
    "pycodestyle==2.8.0",
    "pydantic==1.9.0",
    "pyhumps==3.5.0",
    "pyparsing==3.0.6",
    "python-dateutil==2.8.2",
    "python-dotenv==0.19.2",
    "pytz==2021.3",
    "requests==2.27.1",
    "rsa==4.8",
    "six==1.16.0",
    "sniffio==1.2.0",
    "SQLAlchemy==1.3.24",
    "SQLAlchemy-Utils==0.38.2",
    "starlette==0.16.0",
    "toml==0.10.2",
    "toolz==0.11.2",
    "typing-extensions==4.0.1",
    "uritemplate==4.1.1",
    "urllib3==1.26.8",
    "uvicorn==0.16.0",
    "zipp==3.7.0",
];

/// The pinned requirement set for a variant.
pub fn pinned_packages(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Minimal => MINIMAL,
        Variant::Service => SERVICE,
        Variant::Hexagonal => HEXAGONAL,
    }
}

/// Arguments for `pip`: `install`, the pinned set, then any extras.
pub fn install_args(settings: &ScaffoldSettings) -> Vec<String> {
    std::iter::once("install")
        .chain(pinned_packages(settings.variant).iter().copied())
        .map(str::to_string)
        .chain(settings.extra_packages.iter().cloned())
        .collect()
}
