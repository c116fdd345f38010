use std::io::IsTerminal;

use clap::Args;
use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Result, WrapErr, bail};

use crate::{
    ops::{self, init::InitOptions},
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project name; the folder is its kebab-case form (prompted when omitted)
    pub name: Option<String>,

    /// Skip Git initialization
    #[arg(long)]
    pub no_git: bool,

    /// Skip Docker setup
    #[arg(long)]
    pub no_docker: bool,

    /// Skip npm install
    #[arg(long)]
    pub no_install: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => Self::prompt_name()?,
        };
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;

        let mut out = TerminalOutput::new();
        out.info("Initializing new SPA project...");
        if !self.no_install {
            out.info("Installing dependencies may take a minute...");
        }

        let opts = InitOptions {
            no_git: self.no_git,
            no_docker: self.no_docker,
            no_install: self.no_install,
        };
        let report = ops::init(&cwd, &name, opts)
            .inspect_err(|_| out.error("Failed to create project"))?;
        report.render(&mut out);

        Ok(())
    }

    fn prompt_name() -> Result<String> {
        if !std::io::stdin().is_terminal() {
            bail!("Missing project name. Usage: bay init <project-name>");
        }
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Project name")
            .interact_text()
            .wrap_err("Failed to read project name")
    }
}
