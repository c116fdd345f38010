//! Page generation with route registration.

use bay_core::GeneratedFile;
use bay_project::{Project, register_route, registry};
use bay_templates::PageJs;
use eyre::{Result, WrapErr, bail};
use tracing::debug;

use super::{artifact_name, registration, relative};
use crate::reports::{PageReport, Registration};

/// Options for the page generator.
#[derive(Debug, Default)]
pub struct PageOptions {
    /// URL path; defaults to the kebab-case name.
    pub path: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub no_seo: bool,
    pub no_route: bool,
}

/// Generate `<pages>/<kebab>/<kebab>.js` and register its route.
pub fn generate_page(project: &Project, name: &str, opts: PageOptions) -> Result<PageReport> {
    let name = artifact_name("page", name)?;

    let mut page = PageJs::new(&name).with_seo(!opts.no_seo);
    if let Some(path) = opts.path {
        page = page.with_url_path(path.trim_matches('/'));
    }
    if let Some(title) = opts.title {
        page = page.with_title(title);
    }
    if let Some(description) = opts.description {
        page = page.with_description(description);
    }

    let pages_dir = project.pages_dir();
    let page_dir = pages_dir.join(&page.folder_name);
    if page_dir.exists() {
        bail!(
            "Page \"{}\" already exists at {}",
            page.folder_name,
            page_dir.display()
        );
    }

    let file = page.path(&pages_dir);
    page.write(&pages_dir)
        .wrap_err_with(|| format!("Failed to create page \"{}\"", page.folder_name))?;
    debug!(path = %file.display(), "page written");

    let route = if opts.no_route {
        Registration::Disabled
    } else {
        let routes = project.routes_path();
        let source = registry::import_source(&routes, &file);
        registration(
            project.root(),
            &routes,
            register_route(&routes, &page.class_name, &file),
            vec![
                registry::page_import_line(&page.class_name, &source),
                registry::route_entry(&page.class_name),
            ],
        )
    };

    Ok(PageReport {
        class_name: page.class_name,
        url_path: page.url_path,
        file: relative(project.root(), &file),
        routes_file: relative(project.root(), &project.routes_path()),
        route,
    })
}
