use std::{io::IsTerminal, path::Path};

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use gantry_plan::Variant;

use super::UnwrapOrExit;
use crate::{
    ops::{self, init::InitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project layout (prompted for when omitted on a terminal)
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
}

impl InitCommand {
    pub fn run(&self, dir: &Path) -> Result<()> {
        let variant = match self.variant {
            Some(variant) => variant,
            None if std::io::stdin().is_terminal() => Self::prompt_variant()?,
            None => Variant::default(),
        };
        let package = ops::init::package_name(self.package.as_deref()).unwrap_or_exit();

        let report = ops::init(InitOptions {
            dir,
            variant,
            package,
            python: self.python.clone(),
            port: self.port,
        })?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn prompt_variant() -> Result<Variant> {
        let items: Vec<String> = Variant::ALL
            .iter()
            .map(|v| format!("{:<10} {}", v.as_str(), v.description()))
            .collect();
        let default = Variant::ALL
            .iter()
            .position(|v| *v == Variant::default())
            .unwrap_or(0);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a project layout")
            .items(&items)
            .default(default)
            .interact()
            .wrap_err("Failed to get variant selection")?;

        Ok(Variant::ALL[selection])
    }
}
