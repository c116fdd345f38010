//! Init command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from project initialization.
#[derive(Debug)]
pub struct InitReport {
    /// Project name as typed.
    pub name: String,
    /// Project folder (kebab-case).
    pub folder: String,
    /// Files written, relative to the project root.
    pub files: Vec<PathBuf>,
    pub docker: bool,
    pub git: GitSetup,
    pub install: Install,
}

/// Outcome of the version control step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitSetup {
    Committed,
    /// `git init` worked but the initial commit did not.
    InitializedOnly,
    Failed,
    Skipped,
}

/// Outcome of the dependency install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Install {
    Installed,
    Failed,
    Skipped,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!("Created project directory: {}", self.folder));
        out.success(&format!("Wrote {} files", self.files.len()));

        match self.git {
            GitSetup::Committed => {
                out.success("Git repository initialized");
                out.success("Initial commit created");
            }
            GitSetup::InitializedOnly => {
                out.success("Git repository initialized");
                out.warning("Could not create initial commit (configure git user first)");
                out.info("   Run: git config user.name \"Your Name\"");
                out.info("   Run: git config user.email \"your@email.com\"");
            }
            GitSetup::Failed => {
                out.warning("Git initialization failed. Install git or run it manually.")
            }
            GitSetup::Skipped => {}
        }

        if self.docker {
            out.success("Docker configuration ready");
        }

        match self.install {
            Install::Installed => out.success("Dependencies installed"),
            Install::Failed => {
                out.warning("Failed to install dependencies. Run manually:");
                out.warning(&format!("   cd {} && npm install", self.folder));
            }
            Install::Skipped => {}
        }

        out.newline();
        out.success(&format!("Project \"{}\" created successfully!", self.name));
        out.section("Next steps");
        out.numbered_item(1, &format!("cd {}", self.folder));
        if self.install == Install::Installed {
            out.numbered_item(2, "npm start");
        } else {
            out.numbered_item(2, "npm install");
            out.numbered_item(3, "npm start");
        }

        if self.docker {
            out.newline();
            out.section("Or with Docker");
            out.preformatted(&format!("  cd {}", self.folder));
            out.preformatted("  docker-compose up");
        }

        out.newline();
        out.section("Generate code");
        out.list_item("bay generate:page <name>");
        out.list_item("bay generate:component <name>");
        out.list_item("bay generate:service <name>");
        out.newline();
        out.info("Visit http://localhost:8080 after starting");
    }
}
