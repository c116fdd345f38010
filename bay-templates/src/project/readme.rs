//! README for new projects.

use std::path::{Path, PathBuf};

use bay_core::{FileRules, GeneratedFile};

/// The README.md of a new project.
pub struct Readme {
    pub name: String,
    pub package_name: String,
    pub docker: bool,
}

impl Readme {
    pub fn new(name: impl Into<String>, package_name: impl Into<String>, docker: bool) -> Self {
        Self {
            name: name.into(),
            package_name: package_name.into(),
            docker,
        }
    }
}

impl GeneratedFile for Readme {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("README.md")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let docker = if self.docker {
            "\n## Docker\n\n```sh\ndocker-compose up\n```\n\nThe app is served by nginx on http://localhost:8080.\n"
        } else {
            ""
        };

        format!(
            r#"# {name}

A single page application built with plain JavaScript.

## Getting started

```sh
cd {package_name}
npm install
npm start
```

Then open http://localhost:8080.
{docker}
## Generators

```sh
bay generate:page <name>        # src/pages/<name>/<name>.js, registered in src/app/global-scope.js
bay generate:component <Name>   # src/components/<Name>/<Name>.js + .css, imported in src/styles/main.css
bay generate:service <name>     # src/services/<name>.js
```

## Layout

- `src/app/global-scope.js` - route table; `NotFound` must stay last
- `src/styles/main.css` - global styles and component stylesheet imports
- `src/components/Component.js` - base class for components
- `src/services/api-service.js` - fetch wrapper used by services
"#,
            name = self.name,
            package_name = self.package_name,
        )
    }
}
