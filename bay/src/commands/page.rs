use clap::Args;
use eyre::Result;

use super::{check_project, current_project};
use crate::{
    ops::{self, page::PageOptions},
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct PageCommand {
    /// Page name (e.g. "about" or "Contact Us")
    pub name: String,

    /// Custom URL path (defaults to the kebab-case name)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Page title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Page description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Skip SEO configuration
    #[arg(long)]
    pub no_seo: bool,

    /// Skip automatic route registration
    #[arg(long)]
    pub no_route: bool,
}

impl PageCommand {
    pub fn run(&self) -> Result<()> {
        let project = current_project()?;
        let mut out = TerminalOutput::new();
        out.info("Generating new page...");
        check_project(&project, &mut out);

        let opts = PageOptions {
            path: self.path.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            no_seo: self.no_seo,
            no_route: self.no_route,
        };
        let report = ops::generate_page(&project, &self.name, opts)
            .inspect_err(|_| out.error("Failed to generate page"))?;
        report.render(&mut out);

        Ok(())
    }
}
