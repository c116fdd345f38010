//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod component;
mod info;
mod init;
mod list;
mod output;
mod page;
mod registration;
mod service;

pub use component::ComponentReport;
pub use info::{InfoReport, ProjectInfo};
pub use init::{GitSetup, InitReport, Install};
pub use list::ListReport;
#[cfg(test)]
pub use output::CapturedOutput;
pub use output::{Output, Report, TerminalOutput};
pub use page::PageReport;
pub use registration::Registration;
pub use service::ServiceReport;
