//! Core utilities and types for the bay scaffolding CLI.
//!
//! This crate provides the name normalizer and the file-writing
//! primitives used across the bay workspace.

mod file;
pub mod layout;
mod naming;

// File operations
pub use file::{FileRules, GeneratedFile, WriteResult};
// String utilities
pub use naming::{ArtifactName, to_camel_case, to_kebab_case, to_pascal_case};
