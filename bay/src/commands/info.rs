use clap::Args;
use eyre::Result;

use super::current_project;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let project = current_project()?;
        ops::info(&project).render(&mut TerminalOutput::new());
        Ok(())
    }
}
