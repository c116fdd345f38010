//! Service generator report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from service generation.
#[derive(Debug)]
pub struct ServiceReport {
    /// Exported service object, e.g. `userProfileService`.
    pub object_name: String,
    pub file_name: String,
    pub base_url: String,
    /// Service module, relative to the project root.
    pub file: PathBuf,
}

impl Report for ServiceReport {
    fn render(&self, out: &mut dyn Output) {
        let service = &self.object_name;

        out.success(&format!("Created service file: {}", self.file.display()));
        out.newline();
        out.info("Usage example:");
        out.info(&format!(
            "   import {{ {service} }} from '../../services/{}.js';",
            self.file_name
        ));
        out.info("");
        out.info(&format!("   const items = await {service}.getAll();"));
        out.info(&format!("   const item = await {service}.getById(123);"));
        out.info(&format!(
            "   const created = await {service}.create({{ name: 'Test' }});"
        ));
        out.info(&format!(
            "   const updated = await {service}.update(123, {{ name: 'Updated' }});"
        ));
        out.info(&format!("   await {service}.delete(123);"));

        out.newline();
        out.success("Service generated successfully!");
        out.section("Files created");
        out.added_item(&self.file.display().to_string());
        out.key_value("Base URL", &self.base_url);

        out.section("Next steps");
        out.numbered_item(1, &format!("Update the base URL in: {}", self.file.display()));
        out.numbered_item(2, "Customize the API methods as needed");
        out.numbered_item(3, "Import and use it in your pages");
    }
}
