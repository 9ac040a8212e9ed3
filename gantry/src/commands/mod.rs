mod completions;
mod init;
mod list;
mod plan;
mod run;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use gantry_plan::{ScaffoldSettings, Variant};
use init::InitCommand;
use list::ListCommand;
use plan::PlanCommand;
use run::RunCommand;

use crate::ops::settings::{SettingsOptions, resolve_settings};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gantry_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gantry")]
#[command(version)]
#[command(about = "Scaffold FastAPI service projects")]
pub(crate) struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Target directory
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let dir = self.dir.as_path();
        match &self.command {
            Commands::Run(cmd) => cmd.run(dir),
            Commands::Plan(cmd) => cmd.run(dir),
            Commands::List(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(dir),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run scaffold tasks (all default tasks when none are named)
    Run(RunCommand),

    /// Show the steps a run would take without taking them
    Plan(PlanCommand),

    /// List the available tasks
    List(ListCommand),

    /// Write a starter gantry.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Flags that override gantry.toml.
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Project layout: minimal, service or hexagonal
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Root package name for the hexagonal layout
    #[arg(long)]
    pub package: Option<String>,

    /// Interpreter passed to virtualenv
    #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub python: Option<String>,

    /// Development server port
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Path to gantry.toml (defaults to <dir>/gantry.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl SettingsArgs {
    /// Resolve flags against the manifest; exits on manifest errors.
    pub fn resolve(&self, dir: &Path) -> ScaffoldSettings {
        resolve_settings(&SettingsOptions {
            dir,
            config: self.config.as_deref(),
            variant: self.variant,
            package: self.package.as_deref(),
            python: self.python.as_deref(),
            port: self.port,
        })
        .unwrap_or_exit()
    }
}
