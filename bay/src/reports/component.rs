//! Component generator report.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    registration::Registration,
};

/// Report data from component generation.
#[derive(Debug)]
pub struct ComponentReport {
    pub class_name: String,
    /// Component folder, relative to the project root.
    pub dir: PathBuf,
    /// Files written, relative to the project root.
    pub files: Vec<PathBuf>,
    pub stylesheet: Registration,
}

impl Report for ComponentReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.success(&format!("Created {}", file.display()));
        }
        self.stylesheet.render("stylesheet", out);

        let class = &self.class_name;
        out.newline();
        out.info("Usage example:");
        out.info(&format!(
            "   import {{ {class} }} from '../../components/{class}/{class}.js';"
        ));
        out.info("");
        out.info(&format!("   const component = new {class}({{"));
        out.info("     // props here");
        out.info("   });");
        out.info("   component.mount('#container');");

        out.newline();
        out.success("Component generated successfully!");
        out.section("Files created");
        for file in &self.files {
            out.added_item(&file.display().to_string());
        }

        out.section("Next steps");
        let mut steps = Vec::new();
        if let Some(script) = self.files.first() {
            steps.push(format!("Customize the component in: {}", script.display()));
        }
        if let Some(css) = self.files.get(1) {
            steps.push(format!("Add styles in: {}", css.display()));
        }
        steps.push("Import and use it in your pages".to_string());
        for (i, step) in steps.iter().enumerate() {
            out.numbered_item(i + 1, step);
        }
    }
}
