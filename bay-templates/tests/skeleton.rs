//! Writes a complete project skeleton to disk.

use std::fs;

use bay_core::{ArtifactName, WriteResult, layout};
use bay_templates::ProjectSkeleton;
use tempfile::TempDir;

#[test]
fn test_skeleton_writes_every_file() {
    let temp = TempDir::new().unwrap();
    let skeleton = ProjectSkeleton::new(&ArtifactName::new("Shop Front"));

    for file in skeleton.files() {
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
    }

    for path in [
        layout::PACKAGE_JSON,
        layout::STYLESHEET,
        layout::ROUTES,
        "src/index.html",
        "src/app/router.js",
        "src/components/Component.js",
        "src/services/api-service.js",
        "src/pages/home/home.js",
        "src/pages/not-found/not-found.js",
        "Dockerfile",
        "docker-compose.yml",
        "nginx.conf",
        ".gitignore",
        "README.md",
    ] {
        assert!(temp.path().join(path).is_file(), "missing {path}");
    }

    let package = fs::read_to_string(temp.path().join(layout::PACKAGE_JSON)).unwrap();
    assert!(package.contains("\"name\": \"shop-front\""));
}

#[test]
fn test_skeleton_never_overwrites() {
    let temp = TempDir::new().unwrap();
    let readme = temp.path().join("README.md");
    fs::write(&readme, "keep me").unwrap();

    let skeleton = ProjectSkeleton::new(&ArtifactName::new("demo")).with_docker(false);
    for file in skeleton.files() {
        file.write(temp.path()).unwrap();
    }

    assert_eq!(fs::read_to_string(readme).unwrap(), "keep me");
    assert!(!temp.path().join("Dockerfile").exists());
}
