//! Page generator report.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    registration::Registration,
};

/// Report data from page generation.
#[derive(Debug)]
pub struct PageReport {
    pub class_name: String,
    /// URL path the page answers to.
    pub url_path: String,
    /// Page script, relative to the project root.
    pub file: PathBuf,
    /// Route registry, relative to the project root.
    pub routes_file: PathBuf,
    pub route: Registration,
}

impl Report for PageReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!("Created page file: {}", self.file.display()));
        self.route.render("route", out);

        out.newline();
        out.info("To add a navigation link, update src/index.html:");
        out.info(&format!(
            "   <a href=\"/{0}\" onclick=\"navigate(event, '{0}')\">{1}</a>",
            self.url_path, self.class_name
        ));

        out.newline();
        out.success("Page generated successfully!");
        out.section("Files created");
        out.added_item(&self.file.display().to_string());

        out.section("Next steps");
        out.numbered_item(
            1,
            &format!("Navigate to: http://localhost:8080/{}", self.url_path),
        );
        out.numbered_item(
            2,
            &format!("Edit page content in: {}", self.file.display()),
        );
        if self.route.needs_manual_edit() {
            out.numbered_item(
                3,
                &format!("Register the route manually in {}", self.routes_file.display()),
            );
        }
    }
}
