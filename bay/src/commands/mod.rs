mod completions;
mod component;
mod info;
mod init;
mod list;
mod page;
mod service;

use bay_project::Project;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use component::ComponentCommand;
use eyre::{Result, WrapErr};
use info::InfoCommand;
use init::InitCommand;
use list::ListCommand;
use page::PageCommand;
use service::ServiceCommand;

use crate::reports::Output;

/// Extension trait for exiting on project config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for bay_project::Result<T> {
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

/// Open the project rooted at the current directory.
pub(crate) fn current_project() -> Result<Project> {
    let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
    Ok(Project::open(cwd).unwrap_or_exit())
}

/// Warn when the project root does not look like a bay project.
pub(crate) fn check_project(project: &Project, out: &mut dyn Output) {
    if !project.is_initialized() {
        out.warning("No package.json or src/ directory found; run generators from the project root");
    }
}

#[derive(Parser)]
#[command(name = "bay")]
#[command(version)]
#[command(about = "Create and grow plain JavaScript single-page applications")]
pub(crate) struct Cli {
    /// Show diagnostic logs (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Page(cmd) => cmd.run(),
            Commands::Component(cmd) => cmd.run(),
            Commands::Service(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new SPA project with all files, Git, and Docker
    Init(InitCommand),

    /// Generate a new page with automatic routing
    #[command(name = "generate:page", alias = "g:page")]
    Page(PageCommand),

    /// Generate a new component with CSS
    #[command(name = "generate:component", alias = "g:component")]
    Component(ComponentCommand),

    /// Generate a new API service
    #[command(name = "generate:service", alias = "g:service")]
    Service(ServiceCommand),

    /// List all available generators
    #[command(alias = "ls")]
    List(ListCommand),

    /// Show version and project information
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
