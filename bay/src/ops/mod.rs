//! Core operations.
//!
//! This module contains the business logic for bay commands,
//! separated from CLI argument parsing and output rendering.
//! Every operation takes explicit paths so it can run against any root.

pub mod component;
pub mod info;
pub mod init;
pub mod page;
pub mod service;

use std::path::{Path, PathBuf};

use bay_core::ArtifactName;
use bay_project::{RegisterError, Registered};
use eyre::{Result, bail};
use miette::Diagnostic;
use tracing::debug;

pub use component::generate_component;
pub use info::info;
pub use init::init;
pub use page::generate_page;
pub use service::generate_service;

use crate::reports::Registration;

/// Normalize a user-supplied artifact name, rejecting names that cannot
/// become a file name and a JavaScript identifier.
fn artifact_name(kind: &str, raw: &str) -> Result<ArtifactName> {
    let valid_chars = raw
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c.is_whitespace());
    let name = ArtifactName::new(raw);

    if !valid_chars || !name.pascal().chars().any(char::is_alphanumeric) {
        bail!(
            "Invalid {} name \"{}\": use letters, digits, spaces, '-' or '_'",
            kind,
            raw
        );
    }
    Ok(name)
}

/// `path` relative to `root` for display, or `path` itself when outside it.
fn relative(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Turn a registrar result into a report outcome.
fn registration(
    root: &Path,
    file: &Path,
    result: std::result::Result<Registered, RegisterError>,
    manual: Vec<String>,
) -> Registration {
    let file = relative(root, file);
    match result {
        Ok(registered) => Registration::Registered {
            file,
            lines: registered.inserted,
        },
        Err(err) if err.is_already_registered() => {
            debug!(error = %err, "registration skipped");
            Registration::AlreadyPresent { file }
        }
        Err(err) => {
            debug!(error = %err, "registration failed");
            Registration::Failed {
                file,
                reason: err.to_string(),
                help: err.help().map(|help| help.to_string()),
                manual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_name_accepts_words() {
        let name = artifact_name("page", "Contact Us").unwrap();
        assert_eq!(name.pascal(), "ContactUs");
        assert_eq!(name.kebab(), "contact-us");
    }

    #[test]
    fn test_artifact_name_rejects_paths() {
        assert!(artifact_name("page", "../escape").is_err());
        assert!(artifact_name("page", "a/b").is_err());
    }

    #[test]
    fn test_artifact_name_rejects_separators_only() {
        assert!(artifact_name("component", "--").is_err());
        assert!(artifact_name("component", "").is_err());
    }

    #[test]
    fn test_relative() {
        let root = Path::new("/project");
        assert_eq!(
            relative(root, Path::new("/project/src/pages")),
            PathBuf::from("src/pages")
        );
        assert_eq!(relative(root, Path::new("/other")), PathBuf::from("/other"));
    }
}
