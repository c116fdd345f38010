//! Pages every new project starts with.

use std::path::{Path, PathBuf};

use bay_core::{FileRules, GeneratedFile, layout};

use crate::escape::{single_quoted, template_literal};

/// `src/pages/home/home.js`, served at `/`.
pub struct HomePageJs {
    pub project_name: String,
}

impl HomePageJs {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }
}

impl GeneratedFile for HomePageJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(layout::PAGES_DIR).join("home").join("home.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        format!(
            r#"/**
 * Home Page
 */
export class Home {{
  paths = ['', 'home'];

  title = '{title}';
  description = 'Welcome page';

  async getPageContent() {{
    return `
      <div class="page-container">
        <header class="page-header">
          <h1>{heading}</h1>
          <p class="subtitle">Edit src/pages/home/home.js to get started.</p>
        </header>
      </div>
    `;
  }}
}}
"#,
            title = single_quoted(&self.project_name),
            heading = template_literal(&self.project_name),
        )
    }
}

/// `src/pages/not-found/not-found.js`, the catch-all route.
pub struct NotFoundPageJs;

impl GeneratedFile for NotFoundPageJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(layout::PAGES_DIR)
            .join("not-found")
            .join("not-found.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"/**
 * NotFound Page
 * Matches every path, so it must be the last registered route.
 */
export class NotFound {
  paths = ['*'];

  title = 'Page Not Found';
  description = 'The requested page does not exist';

  async getPageContent() {
    return `
      <div class="page-container">
        <header class="page-header">
          <h1>404</h1>
          <p class="subtitle">The page you are looking for does not exist.</p>
        </header>
        <a href="/" onclick="navigate(event, '')">Back to home</a>
      </div>
    `;
  }
}
"#
        .to_string()
    }
}
