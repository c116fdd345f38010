//! File templates for the bay scaffolding CLI.
//!
//! Every template is a [`GeneratedFile`](bay_core::GeneratedFile): a plain
//! configuration record that knows where it lives and how to render itself.
//! Rendering is pure; writing is left to the caller.
//!
//! - [`artifacts`] - pages, components and services generated into an
//!   existing project
//! - [`project`] - the files of a fresh project skeleton

pub mod artifacts;
mod escape;
pub mod project;

pub use artifacts::{ComponentCss, ComponentJs, DEFAULT_BASE_URL, PageJs, ServiceJs};
pub use project::ProjectSkeleton;
