//! Optional `bay.toml` project configuration.
//!
//! ```toml
//! [paths]
//! pages = "src/pages"
//! components = "src/components"
//! services = "src/services"
//! stylesheet = "src/styles/main.css"
//! routes = "src/app/global-scope.js"
//!
//! [service]
//! base_url = "https://api.example.com/v1"
//! ```
//!
//! Every key is optional. Without the file the default layout is used.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use bay_core::layout;
use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result, error::SourceContext};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "bay.toml";

/// Parsed `bay.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub paths: PathsConfig,
    pub service: ServiceDefaults,
}

/// Project-relative locations of generated code and registry files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub pages: PathBuf,
    pub components: PathBuf,
    pub services: PathBuf,
    pub stylesheet: PathBuf,
    pub routes: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            pages: layout::PAGES_DIR.into(),
            components: layout::COMPONENTS_DIR.into(),
            services: layout::SERVICES_DIR.into(),
            stylesheet: layout::STYLESHEET.into(),
            routes: layout::ROUTES.into(),
        }
    }
}

/// Defaults for generated services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceDefaults {
    /// Overrides the template's placeholder API URL.
    pub base_url: Option<String>,
}

impl FromStr for ProjectConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<ProjectConfig> {
    let ctx = SourceContext::new(content, filename);
    let config: ProjectConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let paths = &config.paths;
    for (key, path) in [
        ("pages", &paths.pages),
        ("components", &paths.components),
        ("services", &paths.services),
        ("stylesheet", &paths.stylesheet),
        ("routes", &paths.routes),
    ] {
        if path.as_os_str().is_empty() {
            return Err(ctx.validation_error(format!("paths.{key} must not be empty"), key));
        }
        if path.is_absolute() {
            return Err(ctx.validation_error(
                format!("paths.{key} must be relative to the project root"),
                key,
            ));
        }
    }

    Ok(config)
}

/// A project root together with its configuration.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    /// Open the project at `root`, reading `bay.toml` when present.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config_path = root.join(CONFIG_FILE);

        let config = if config_path.is_file() {
            let content = std::fs::read_to_string(&config_path).map_err(|e| {
                Box::new(Error::Io {
                    path: config_path.clone(),
                    source: e,
                })
            })?;
            debug!(path = %config_path.display(), "loaded project config");
            parse_config(&content, &config_path.display().to_string())?
        } else {
            ProjectConfig::default()
        };

        Ok(Self { root, config })
    }

    /// A project at `root` with an explicit configuration.
    pub fn with_config(root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.pages)
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.components)
    }

    pub fn services_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.services)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.root.join(&self.config.paths.stylesheet)
    }

    pub fn routes_path(&self) -> PathBuf {
        self.root.join(&self.config.paths.routes)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.config.service.base_url.as_deref()
    }

    /// Whether `root` looks like a generated project.
    pub fn is_initialized(&self) -> bool {
        self.root.join(layout::PACKAGE_JSON).is_file() && self.root.join(layout::SRC_DIR).is_dir()
    }

    /// Whether `bay.toml` exists at the root.
    pub fn has_config_file(&self) -> bool {
        self.root.join(CONFIG_FILE).is_file()
    }
}
