use clap::Args;
use eyre::Result;

use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        ListReport::default().render(&mut TerminalOutput::new());
        Ok(())
    }
}
