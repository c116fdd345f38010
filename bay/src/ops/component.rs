//! Component generation with stylesheet registration.

use std::path::PathBuf;

use bay_core::GeneratedFile;
use bay_project::{Project, register_component_css, registry};
use bay_templates::{ComponentCss, ComponentJs};
use eyre::{Result, WrapErr, bail};
use tracing::debug;

use super::{artifact_name, registration, relative};
use crate::reports::{ComponentReport, Registration};

/// Options for the component generator.
#[derive(Debug, Default)]
pub struct ComponentOptions {
    /// Parent directory, relative to the project root.
    pub dir: Option<PathBuf>,
    pub no_css: bool,
    pub no_state: bool,
    pub no_lifecycle: bool,
}

/// Generate `<components>/<Pascal>/<Pascal>.js`, its stylesheet, and the
/// stylesheet import.
pub fn generate_component(
    project: &Project,
    name: &str,
    opts: ComponentOptions,
) -> Result<ComponentReport> {
    let name = artifact_name("component", name)?;
    let base = match &opts.dir {
        Some(dir) => project.root().join(dir),
        None => project.components_dir(),
    };

    let script = ComponentJs::new(&name)
        .with_state(!opts.no_state)
        .with_lifecycle(!opts.no_lifecycle);
    let component_dir = base.join(&script.class_name);
    if component_dir.exists() {
        bail!(
            "Component \"{}\" already exists at {}",
            script.class_name,
            component_dir.display()
        );
    }

    let mut files = vec![relative(project.root(), &script.path(&base))];
    script
        .write(&base)
        .wrap_err_with(|| format!("Failed to create component \"{}\"", script.class_name))?;

    let stylesheet = if opts.no_css {
        Registration::Disabled
    } else {
        let css = ComponentCss::new(&name);
        let css_file = css.path(&base);
        files.push(relative(project.root(), &css_file));
        css.write(&base)
            .wrap_err_with(|| format!("Failed to create stylesheet for \"{}\"", css.class_name))?;

        let main_css = project.stylesheet_path();
        registration(
            project.root(),
            &main_css,
            register_component_css(&main_css, &script.class_name, &css_file),
            vec![registry::component_import_line(&registry::import_source(
                &main_css, &css_file,
            ))],
        )
    };
    debug!(component = %script.class_name, files = files.len(), "component written");

    Ok(ComponentReport {
        class_name: script.class_name,
        dir: relative(project.root(), &component_dir),
        files,
        stylesheet,
    })
}
