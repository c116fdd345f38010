//! Registration against the files written by `init`.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use bay_core::{GeneratedFile, layout};
use bay_project::{RegisterError, Registered, register_component_css, register_route};
use bay_templates::project::{GlobalScopeJs, MainCss};
use tempfile::TempDir;

const COMPONENT_IMPORTS_BLOCK: &str = "\
/* ========================================
   Component Imports
   ======================================== */

/* Import component styles */

";

/// A project root holding the skeleton's two registry files.
fn project() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    MainCss.write(dir.path()).unwrap();
    GlobalScopeJs.write(dir.path()).unwrap();
    let stylesheet = dir.path().join(layout::STYLESHEET);
    let routes = dir.path().join(layout::ROUTES);
    (dir, stylesheet, routes)
}

/// Register a component stylesheet at its default location under `root`.
fn register_css(
    root: &Path,
    stylesheet: &Path,
    component: &str,
) -> Result<Registered, RegisterError> {
    let css = root
        .join(layout::COMPONENTS_DIR)
        .join(component)
        .join(format!("{}.css", component));
    register_component_css(stylesheet, component, &css)
}

/// Register a page module at its default location under `root`.
fn register_page(
    root: &Path,
    routes: &Path,
    class_name: &str,
    folder: &str,
) -> Result<Registered, RegisterError> {
    let module = root
        .join(layout::PAGES_DIR)
        .join(folder)
        .join(format!("{}.js", folder));
    register_route(routes, class_name, &module)
}

fn head(content: &str, lines: usize) -> String {
    content.lines().take(lines).collect::<Vec<_>>().join("\n")
}

#[test]
fn test_component_imports_in_registration_order() {
    let (dir, stylesheet, _) = project();

    register_css(dir.path(), &stylesheet, "UserProfile").unwrap();
    register_css(dir.path(), &stylesheet, "Card").unwrap();

    let content = fs::read_to_string(&stylesheet).unwrap();
    insta::assert_snapshot!("component_imports", head(&content, 9));
}

#[test]
fn test_registered_reports_inserted_line() {
    let (dir, stylesheet, _) = project();

    let registered = register_css(dir.path(), &stylesheet, "UserProfile").unwrap();
    assert_eq!(registered.path, stylesheet);
    assert_eq!(
        registered.inserted,
        vec!["@import url('../components/UserProfile/UserProfile.css');"]
    );
}

#[test]
fn test_component_registered_twice() {
    let (dir, stylesheet, _) = project();
    register_css(dir.path(), &stylesheet, "Card").unwrap();
    let before = fs::read(&stylesheet).unwrap();

    let err = register_css(dir.path(), &stylesheet, "Card").unwrap_err();

    assert!(err.is_already_registered());
    assert_eq!(fs::read(&stylesheet).unwrap(), before);
    let content = String::from_utf8(before).unwrap();
    assert_eq!(content.matches("Card/Card.css").count(), 1);
}

#[test]
fn test_block_created_before_accessibility() {
    let (dir, stylesheet, _) = project();
    let original = fs::read_to_string(&stylesheet).unwrap();
    fs::write(&stylesheet, original.replacen(COMPONENT_IMPORTS_BLOCK, "", 1)).unwrap();

    register_css(dir.path(), &stylesheet, "Card").unwrap();

    let content = fs::read_to_string(&stylesheet).unwrap();
    assert!(content.starts_with("/* ========================================\n   Variables"));
    assert!(content.contains(
        "/* Import component styles */\n\
         @import url('../components/Card/Card.css');\n\
         \n\
         /* ========================================\n   Accessibility\n   ======================================== */\n\
         \n\
         :focus-visible {"
    ));
    assert_eq!(content.matches("Component Imports").count(), 1);
}

#[test]
fn test_missing_stylesheet() {
    let dir = TempDir::new().unwrap();
    let stylesheet = dir.path().join(layout::STYLESHEET);

    let err = register_css(dir.path(), &stylesheet, "Card").unwrap_err();

    assert!(matches!(err, RegisterError::Missing { .. }));
    assert!(!stylesheet.exists());
}

#[test]
fn test_routes_keep_not_found_last() {
    let (dir, _, routes) = project();

    register_page(dir.path(), &routes, "ContactUs", "contact-us").unwrap();
    register_page(dir.path(), &routes, "About", "about").unwrap();

    let content = fs::read_to_string(&routes).unwrap();
    insta::assert_snapshot!("routes_after_two_pages", content);
}

#[test]
fn test_route_registered_twice() {
    let (dir, _, routes) = project();
    register_page(dir.path(), &routes, "ContactUs", "contact-us").unwrap();
    let before = fs::read(&routes).unwrap();

    let err = register_page(dir.path(), &routes, "ContactUs", "contact-us").unwrap_err();

    assert!(err.is_already_registered());
    assert_eq!(fs::read(&routes).unwrap(), before);
}

#[test]
fn test_route_without_not_found_is_unchanged() {
    let (dir, _, routes) = project();
    let edited = fs::read_to_string(&routes)
        .unwrap()
        .replace("  new NotFound()\n", "");
    fs::write(&routes, &edited).unwrap();

    let err = register_page(dir.path(), &routes, "About", "about").unwrap_err();

    assert!(matches!(err, RegisterError::AnchorNotFound { .. }));
    assert_eq!(fs::read_to_string(&routes).unwrap(), edited);
}

#[test]
fn test_missing_routes_file() {
    let dir = TempDir::new().unwrap();
    let routes = dir.path().join(layout::ROUTES);
    let err = register_page(dir.path(), &routes, "About", "about").unwrap_err();
    assert!(matches!(err, RegisterError::Missing { .. }));
}

#[test]
fn test_imports_follow_relocated_artifacts() {
    let (dir, stylesheet, routes) = project();
    let card = dir.path().join("lib/widgets/Card/Card.css");
    let about = dir.path().join("src/views/about/about.js");

    let css = register_component_css(&stylesheet, "Card", &card).unwrap();
    let route = register_route(&routes, "About", &about).unwrap();

    assert_eq!(
        css.inserted,
        vec!["@import url('../../lib/widgets/Card/Card.css');"]
    );
    assert_eq!(
        route.inserted[0],
        "import { About } from '../views/about/about.js';"
    );
    assert!(
        fs::read_to_string(&routes)
            .unwrap()
            .contains("import { About } from '../views/about/about.js';")
    );
}
