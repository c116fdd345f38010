//! Files of a freshly initialized project.

mod app;
mod docker;
mod gitignore;
mod index_html;
mod package_json;
mod pages;
mod readme;
mod sources;
mod styles;

use bay_core::{ArtifactName, GeneratedFile};

pub use app::{GlobalScopeJs, RouterJs};
pub use docker::{DockerCompose, Dockerfile, NginxConf};
pub use gitignore::GitIgnore;
pub use index_html::IndexHtml;
pub use package_json::{PackageJson, Script};
pub use pages::{HomePageJs, NotFoundPageJs};
pub use readme::Readme;
pub use sources::{ApiServiceJs, ComponentBaseJs};
pub use styles::MainCss;

/// Every file written by `init`, relative to the new project root.
pub struct ProjectSkeleton {
    /// Project name as typed by the user.
    pub name: String,
    /// Folder and package name (kebab-case).
    pub package_name: String,
    /// Whether to include container files.
    pub docker: bool,
}

impl ProjectSkeleton {
    pub fn new(name: &ArtifactName) -> Self {
        Self {
            name: name.raw().to_string(),
            package_name: name.kebab().to_string(),
            docker: true,
        }
    }

    pub fn with_docker(mut self, docker: bool) -> Self {
        self.docker = docker;
        self
    }

    /// The files to write, in write order.
    pub fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        let mut files: Vec<Box<dyn GeneratedFile>> = vec![
            Box::new(PackageJson::new(&self.name, &self.package_name)),
            Box::new(GitIgnore),
            Box::new(Readme::new(&self.name, &self.package_name, self.docker)),
            Box::new(IndexHtml::new(&self.name)),
            Box::new(MainCss),
            Box::new(RouterJs),
            Box::new(GlobalScopeJs),
            Box::new(ComponentBaseJs),
            Box::new(ApiServiceJs),
            Box::new(HomePageJs::new(&self.name)),
            Box::new(NotFoundPageJs),
        ];

        if self.docker {
            files.push(Box::new(Dockerfile));
            files.push(Box::new(DockerCompose::new(&self.package_name)));
            files.push(Box::new(NginxConf));
        }

        files
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use bay_core::layout;

    use super::*;

    fn paths(skeleton: &ProjectSkeleton) -> Vec<PathBuf> {
        skeleton
            .files()
            .iter()
            .map(|f| f.path(Path::new("")))
            .collect()
    }

    #[test]
    fn test_skeleton_contains_registry_files() {
        let skeleton = ProjectSkeleton::new(&ArtifactName::new("My App"));
        let paths = paths(&skeleton);
        assert!(paths.contains(&PathBuf::from(layout::STYLESHEET)));
        assert!(paths.contains(&PathBuf::from(layout::ROUTES)));
        assert!(paths.contains(&PathBuf::from(layout::PACKAGE_JSON)));
        assert!(paths.contains(&PathBuf::from("src/pages/not-found/not-found.js")));
    }

    #[test]
    fn test_skeleton_docker_toggle() {
        let name = ArtifactName::new("My App");
        let with_docker = paths(&ProjectSkeleton::new(&name));
        let without_docker = paths(&ProjectSkeleton::new(&name).with_docker(false));

        assert!(with_docker.contains(&PathBuf::from("Dockerfile")));
        assert!(with_docker.contains(&PathBuf::from("docker-compose.yml")));
        assert!(!without_docker.contains(&PathBuf::from("Dockerfile")));
        assert!(!without_docker.contains(&PathBuf::from("nginx.conf")));
        assert_eq!(with_docker.len(), without_docker.len() + 3);
    }

    #[test]
    fn test_skeleton_paths_are_unique() {
        let mut paths = paths(&ProjectSkeleton::new(&ArtifactName::new("x")));
        let count = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), count);
    }
}
