//! Default layout of a generated project, relative to its root.

/// Source root of a project.
pub const SRC_DIR: &str = "src";

/// Directory holding one folder per page.
pub const PAGES_DIR: &str = "src/pages";

/// Directory holding one folder per component.
pub const COMPONENTS_DIR: &str = "src/components";

/// Directory holding service modules.
pub const SERVICES_DIR: &str = "src/services";

/// Stylesheet aggregator that imports every component stylesheet.
pub const STYLESHEET: &str = "src/styles/main.css";

/// Route registry module.
pub const ROUTES: &str = "src/app/global-scope.js";

/// Package manifest.
pub const PACKAGE_JSON: &str = "package.json";
