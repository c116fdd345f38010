// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Project configuration and registry-file patching for bay.
//!
//! [`Project`] resolves where generated code and the registry files live,
//! honouring an optional `bay.toml`. The [`registry`] module registers
//! generated components and pages in the stylesheet aggregator and the
//! route registry.

mod config;
mod error;
pub mod registry;

pub use config::{CONFIG_FILE, PathsConfig, Project, ProjectConfig, ServiceDefaults};
pub use error::{EditError, Error, RegisterError, Result};
pub use registry::{Registered, register_component_css, register_route};
