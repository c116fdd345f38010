//! Application shell served for every route.

use std::path::{Path, PathBuf};

use bay_core::{FileRules, GeneratedFile, layout};

use crate::escape::html;

/// `src/index.html`: loads the stylesheet and the route registry.
pub struct IndexHtml {
    pub title: String,
}

impl IndexHtml {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl GeneratedFile for IndexHtml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(layout::SRC_DIR).join("index.html")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="stylesheet" href="/styles/main.css">
</head>
<body>
  <nav class="main-nav">
    <a href="/" onclick="navigate(event, '')">Home</a>
  </nav>

  <main id="app"></main>

  <script type="module" src="/app/global-scope.js"></script>
</body>
</html>
"#,
            title = html(&self.title)
        )
    }
}
