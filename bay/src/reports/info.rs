//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from `bay info`.
#[derive(Debug)]
pub struct InfoReport {
    /// Tool version.
    pub version: String,
    /// Documentation and repository URL.
    pub homepage: String,
    /// Present when run inside a project.
    pub project: Option<ProjectInfo>,
}

/// What the current project contains.
#[derive(Debug)]
pub struct ProjectInfo {
    pub root: PathBuf,
    /// Config file name, when one exists.
    pub config: Option<PathBuf>,
    pub pages: usize,
    pub components: usize,
    pub services: usize,
    pub stylesheet: PathBuf,
    pub routes_file: PathBuf,
    /// Page classes in the route table, in match order.
    pub routes: Vec<String>,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.preformatted("  bay - Pure JavaScript SPA scaffolding");
        out.preformatted("  ─────────────────────────────────────");
        out.newline();
        out.key_value("Version", &self.version);
        out.key_value("Docs", &self.homepage);
        out.newline();

        let Some(project) = &self.project else {
            out.info("Not inside a bay project. Run 'bay init <project-name>' to create one.");
            return;
        };

        out.section("Project");
        out.key_value("Root", &project.root.display().to_string());
        out.key_value(
            "Config",
            &project
                .config
                .as_ref()
                .map(|c| c.display().to_string())
                .unwrap_or_else(|| "defaults".to_string()),
        );
        out.key_value("Pages", &project.pages.to_string());
        out.key_value("Components", &project.components.to_string());
        out.key_value("Services", &project.services.to_string());
        out.key_value("Stylesheet", &project.stylesheet.display().to_string());
        out.key_value("Routes", &project.routes_file.display().to_string());

        if !project.routes.is_empty() {
            out.newline();
            out.section("Routes");
            for (i, route) in project.routes.iter().enumerate() {
                out.numbered_item(i + 1, route);
            }
        }
    }
}
