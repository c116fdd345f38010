use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{check_project, current_project};
use crate::{
    ops::{self, component::ComponentOptions},
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ComponentCommand {
    /// Component name (e.g. "user profile" or "UserProfile")
    pub name: String,

    /// Custom parent directory (default: src/components)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Skip CSS file generation
    #[arg(long)]
    pub no_css: bool,

    /// Skip state management
    #[arg(long)]
    pub no_state: bool,

    /// Skip lifecycle methods
    #[arg(long)]
    pub no_lifecycle: bool,
}

impl ComponentCommand {
    pub fn run(&self) -> Result<()> {
        let project = current_project()?;
        let mut out = TerminalOutput::new();
        out.info("Generating new component...");
        check_project(&project, &mut out);

        let opts = ComponentOptions {
            dir: self.dir.clone(),
            no_css: self.no_css,
            no_state: self.no_state,
            no_lifecycle: self.no_lifecycle,
        };
        let report = ops::generate_component(&project, &self.name, opts)
            .inspect_err(|_| out.error("Failed to generate component"))?;
        report.render(&mut out);

        Ok(())
    }
}
