//! package.json generator for new projects.

use std::path::{Path, PathBuf};

use bay_core::{FileRules, GeneratedFile, layout};
use serde_json::{Map, Value, json};

const DEFAULT_VERSION: &str = "0.1.0";

/// The package.json manifest of a new project.
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub description: String,
    pub scripts: Vec<Script>,
    pub dev_dependencies: Vec<(String, String)>,
}

impl PackageJson {
    /// Manifest for the project `display_name`, published as `package_name`.
    pub fn new(display_name: &str, package_name: &str) -> Self {
        Self {
            name: package_name.to_string(),
            version: DEFAULT_VERSION.to_string(),
            description: format!(
                "{} - A Single Page Application built with Pure JavaScript",
                display_name
            ),
            scripts: vec![
                Script::new("start", "serve src --single --listen 8080"),
                Script::new("generate:page", "bay generate:page"),
                Script::new("generate:component", "bay generate:component"),
                Script::new("generate:service", "bay generate:service"),
            ],
            dev_dependencies: vec![("serve".to_string(), "^14.2.0".to_string())],
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_script(mut self, script: Script) -> Self {
        self.scripts.push(script);
        self
    }

    fn to_value(&self) -> Value {
        let scripts: Map<String, Value> = self
            .scripts
            .iter()
            .map(|s| (s.name.clone(), Value::String(s.command.clone())))
            .collect();
        let dev_dependencies: Map<String, Value> = self
            .dev_dependencies
            .iter()
            .map(|(name, version)| (name.clone(), Value::String(version.clone())))
            .collect();

        json!({
            "name": self.name,
            "version": self.version,
            "description": self.description,
            "type": "module",
            "private": true,
            "author": "",
            "scripts": scripts,
            "devDependencies": dev_dependencies,
        })
    }
}

impl GeneratedFile for PackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(layout::PACKAGE_JSON)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        // Serializing a `Value` cannot fail.
        let mut out = serde_json::to_string_pretty(&self.to_value()).unwrap_or_default();
        out.push('\n');
        out
    }
}

/// An npm script entry.
#[derive(Debug, Clone)]
pub struct Script {
    name: String,
    command: String,
}

impl Script {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}
