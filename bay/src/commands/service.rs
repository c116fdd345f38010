use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{check_project, current_project};
use crate::{
    ops::{self, service::ServiceOptions},
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ServiceCommand {
    /// Service name (e.g. "user profile" or "orders")
    pub name: String,

    /// Custom directory (default: src/services)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Base URL for the API (default: https://api.example.com)
    #[arg(short, long)]
    pub base_url: Option<String>,
}

impl ServiceCommand {
    pub fn run(&self) -> Result<()> {
        let project = current_project()?;
        let mut out = TerminalOutput::new();
        out.info("Generating new service...");
        check_project(&project, &mut out);

        let opts = ServiceOptions {
            dir: self.dir.clone(),
            base_url: self.base_url.clone(),
        };
        let report = ops::generate_service(&project, &self.name, opts)
            .inspect_err(|_| out.error("Failed to generate service"))?;
        report.render(&mut out);

        Ok(())
    }
}
