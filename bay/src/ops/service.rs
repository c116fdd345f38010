//! Service generation.

use std::path::PathBuf;

use bay_core::GeneratedFile;
use bay_project::Project;
use bay_templates::ServiceJs;
use eyre::{Result, WrapErr, bail};
use tracing::debug;

use super::{artifact_name, relative};
use crate::reports::ServiceReport;

/// Options for the service generator.
#[derive(Debug, Default)]
pub struct ServiceOptions {
    /// Target directory, relative to the project root.
    pub dir: Option<PathBuf>,
    /// API base URL; falls back to `bay.toml`, then the template default.
    pub base_url: Option<String>,
}

/// Generate `<services>/<kebab>.js`.
pub fn generate_service(
    project: &Project,
    name: &str,
    opts: ServiceOptions,
) -> Result<ServiceReport> {
    let name = artifact_name("service", name)?;
    let dir = match &opts.dir {
        Some(dir) => project.root().join(dir),
        None => project.services_dir(),
    };

    let mut service = ServiceJs::new(&name);
    if let Some(base_url) = opts.base_url.as_deref().or(project.base_url()) {
        service = service.with_base_url(base_url);
    }

    let file = service.path(&dir);
    if file.exists() {
        bail!(
            "Service \"{}.js\" already exists at {}",
            service.file_name,
            dir.display()
        );
    }

    service
        .write(&dir)
        .wrap_err_with(|| format!("Failed to create service \"{}\"", service.file_name))?;
    debug!(path = %file.display(), base_url = %service.base_url, "service written");

    Ok(ServiceReport {
        object_name: service.object_name,
        file_name: service.file_name,
        base_url: service.base_url,
        file: relative(project.root(), &file),
    })
}
