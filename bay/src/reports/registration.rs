//! Outcome of patching a registry file.

use std::path::PathBuf;

use super::output::Output;

/// What happened to the registry step of a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The registry file was rewritten.
    Registered {
        /// Registry file, relative to the project root.
        file: PathBuf,
        lines: Vec<String>,
    },
    /// The reference was already in the registry; nothing was written.
    AlreadyPresent { file: PathBuf },
    /// The file was left untouched; the user has to add `manual` by hand.
    Failed {
        file: PathBuf,
        reason: String,
        help: Option<String>,
        manual: Vec<String>,
    },
    /// Registration was turned off by a flag.
    Disabled,
}

impl Registration {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }

    /// Whether the user still has to edit the registry by hand.
    pub fn needs_manual_edit(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Render the outcome; `what` names the reference, e.g. "route".
    pub fn render(&self, what: &str, out: &mut dyn Output) {
        match self {
            Self::Registered { file, lines } => {
                out.success(&format!("Registered {} in {}", what, file.display()));
                for line in lines {
                    out.info(&format!("   {}", line));
                }
            }
            Self::AlreadyPresent { file } => {
                out.info(&format!(
                    "The {} is already registered in {}; nothing to add",
                    what,
                    file.display()
                ));
            }
            Self::Failed {
                file,
                reason,
                help,
                manual,
            } => {
                out.warning(&format!("Could not auto-register {}: {}", what, reason));
                if let Some(help) = help {
                    out.info(help);
                }
                out.warning(&format!("Please add manually to {}:", file.display()));
                for line in manual {
                    out.warning(&format!("   {}", line));
                }
            }
            Self::Disabled => {}
        }
    }
}
