//! Init operation - new project skeleton.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use bay_core::WriteResult;
use bay_templates::ProjectSkeleton;
use eyre::{Result, WrapErr, bail};
use tracing::debug;

use super::{artifact_name, relative};
use crate::reports::{GitSetup, InitReport, Install};

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit: SPA project scaffolded";

/// Options for the init operation.
#[derive(Debug, Default)]
pub struct InitOptions {
    pub no_git: bool,
    pub no_docker: bool,
    pub no_install: bool,
}

/// Create a new project named `name` under `parent`.
///
/// Version control and dependency installation failures are reported, not
/// returned: the project itself is usable without them.
pub fn init(parent: &Path, name: &str, opts: InitOptions) -> Result<InitReport> {
    let name = artifact_name("project", name)?;
    let folder = name.kebab().to_string();
    let root = parent.join(&folder);

    if root.exists() {
        bail!(
            "Directory \"{}\" already exists at {}",
            folder,
            root.display()
        );
    }
    std::fs::create_dir_all(&root)
        .wrap_err_with(|| format!("Failed to create directory {}", root.display()))?;

    let skeleton = ProjectSkeleton::new(&name).with_docker(!opts.no_docker);
    let mut files = Vec::new();
    for file in skeleton.files() {
        let path = file.path(&root);
        if file.write(&root)? == WriteResult::Written {
            files.push(relative(&root, &path));
        }
    }
    debug!(root = %root.display(), files = files.len(), "skeleton written");

    let git = if opts.no_git {
        GitSetup::Skipped
    } else {
        init_git(&root)
    };

    let install = if opts.no_install {
        Install::Skipped
    } else if run("npm", &["install"], &root, false) {
        Install::Installed
    } else {
        Install::Failed
    };

    Ok(InitReport {
        name: name.raw().to_string(),
        folder,
        files,
        docker: !opts.no_docker,
        git,
        install,
    })
}

fn init_git(root: &Path) -> GitSetup {
    if !run("git", &["init"], root, true) {
        return GitSetup::Failed;
    }
    if run("git", &["add", "."], root, true)
        && run("git", &["commit", "-m", INITIAL_COMMIT_MESSAGE], root, true)
    {
        GitSetup::Committed
    } else {
        GitSetup::InitializedOnly
    }
}

/// Run `program` in `dir`, returning whether it exited successfully.
fn run(program: &str, args: &[&str], dir: &Path, quiet: bool) -> bool {
    debug!(program, ?args, dir = %dir.display(), "running");
    let mut command = Command::new(program);
    command.args(args).current_dir(dir);
    if quiet {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }

    match command.status() {
        Ok(status) => {
            debug!(program, %status, "finished");
            status.success()
        }
        Err(err) => {
            debug!(program, error = %err, "failed to start");
            false
        }
    }
}
