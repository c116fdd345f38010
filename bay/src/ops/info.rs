//! Info operation - tool and project information.

use std::path::Path;

use bay_project::{CONFIG_FILE, Project, registry::RouteRegistry};

use super::relative;
use crate::reports::{InfoReport, ProjectInfo};

/// Execute the info operation.
///
/// Project details are collected only when `project` looks initialized.
pub fn info(project: &Project) -> InfoReport {
    InfoReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        homepage: env!("CARGO_PKG_HOMEPAGE").to_string(),
        project: project.is_initialized().then(|| collect_project(project)),
    }
}

fn collect_project(project: &Project) -> ProjectInfo {
    let root = project.root();
    let routes = std::fs::read_to_string(project.routes_path())
        .map(|content| {
            RouteRegistry::parse(&content)
                .routes()
                .into_iter()
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    ProjectInfo {
        root: root.to_path_buf(),
        config: project.has_config_file().then(|| CONFIG_FILE.into()),
        pages: count_entries(&project.pages_dir(), |path| path.is_dir()),
        components: count_entries(&project.components_dir(), |path| path.is_dir()),
        services: count_entries(&project.services_dir(), |path| {
            path.extension().is_some_and(|ext| ext == "js")
        }),
        stylesheet: relative(root, &project.stylesheet_path()),
        routes_file: relative(root, &project.routes_path()),
        routes,
    }
}

fn count_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| keep(&entry.path()))
                .count()
        })
        .unwrap_or(0)
}
