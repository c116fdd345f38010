//! Registry files patched when artifacts are generated.
//!
//! Two files reference generated code: the stylesheet aggregator imports
//! every component stylesheet, and the route registry imports and routes
//! every page. Each is parsed into a structured view that computes a single
//! insertion; the file is then rewritten in one write.

mod css;
mod js;
mod routes;
mod text;

use std::path::{Component, Path, PathBuf};

pub use css::{StyleSheet, component_import_line, register_component_css};
pub use routes::{RouteRegistry, page_import_line, register_route, route_entry};

use crate::error::RegisterError;

/// A successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    /// The registry file that was rewritten.
    pub path: PathBuf,
    /// The lines added, in file order.
    pub inserted: Vec<String>,
}

/// Path of `target` as written in an import inside `registry`.
///
/// Both paths are compared lexically; the result always starts with `./` or
/// `../` and uses `/` separators.
pub fn import_source(registry: &Path, target: &Path) -> String {
    let from = normalize(registry.parent().unwrap_or(Path::new("")));
    let to = normalize(target);
    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(to[common..].iter().cloned());
    let source = parts.join("/");
    if source.starts_with("../") {
        source
    } else {
        format!("./{}", source)
    }
}

/// Path components with `.` dropped and `..` resolved against what precedes it.
fn normalize(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|last| last != "..") {
                    parts.pop();
                } else {
                    parts.push("..".to_string());
                }
            }
            Component::Prefix(prefix) => {
                parts.push(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::RootDir => parts.push(String::new()),
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }
    parts
}

fn read_registry(path: &Path) -> Result<String, RegisterError> {
    if !path.is_file() {
        return Err(RegisterError::Missing {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| RegisterError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_registry(path: &Path, content: &str) -> Result<(), RegisterError> {
    std::fs::write(path, content).map_err(|source| RegisterError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_source_default_layout() {
        let root = Path::new("/project");
        assert_eq!(
            import_source(
                &root.join("src/app/global-scope.js"),
                &root.join("src/pages/about/about.js")
            ),
            "../pages/about/about.js"
        );
        assert_eq!(
            import_source(
                &root.join("src/styles/main.css"),
                &root.join("src/components/Card/Card.css")
            ),
            "../components/Card/Card.css"
        );
    }

    #[test]
    fn test_import_source_sibling_and_nested() {
        let root = Path::new("/project");
        assert_eq!(
            import_source(&root.join("app/routes.js"), &root.join("app/views/about/about.js")),
            "./views/about/about.js"
        );
        assert_eq!(
            import_source(
                &root.join("styles/main.css"),
                &root.join("lib/ui/widgets/Card/Card.css")
            ),
            "../lib/ui/widgets/Card/Card.css"
        );
    }

    #[test]
    fn test_import_source_resolves_dot_segments() {
        let root = Path::new("/project");
        assert_eq!(
            import_source(
                &root.join("src/./app/global-scope.js"),
                &root.join("src/app/../pages/home/home.js")
            ),
            "../pages/home/home.js"
        );
    }
}
