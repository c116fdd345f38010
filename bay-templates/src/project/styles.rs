//! Global stylesheet of a new project.

use std::path::{Path, PathBuf};

use bay_core::{FileRules, GeneratedFile, layout};

/// `src/styles/main.css`.
///
/// Component stylesheets are registered in the `Component Imports` block,
/// which sits first because `@import` rules must precede all other rules.
pub struct MainCss;

impl GeneratedFile for MainCss {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(layout::STYLESHEET)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"/* ========================================
   Component Imports
   ======================================== */

/* Import component styles */

/* ========================================
   Variables
   ======================================== */

:root {
  --primary-color: #2c3e50;
  --secondary-color: #34495e;
  --accent-color: #4caf50;
  --text-color: #333333;
  --border-color: #e0e0e0;
  --border-radius: 8px;
  --shadow-lg: 0 10px 25px rgba(0, 0, 0, 0.1);
  --transition: all 0.2s ease-in-out;
  --font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

/* ========================================
   Base
   ======================================== */

*,
*::before,
*::after {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: var(--font-family);
  color: var(--text-color);
  line-height: 1.6;
}

.main-nav {
  display: flex;
  gap: 1rem;
  padding: 1rem 2rem;
  background-color: var(--primary-color);
}

.main-nav a {
  color: white;
  text-decoration: none;
}

.page-container {
  max-width: 960px;
  margin: 0 auto;
  padding: 2rem;
}

.page-header .subtitle {
  color: var(--secondary-color);
}

/* ========================================
   Accessibility
   ======================================== */

:focus-visible {
  outline: 3px solid var(--accent-color);
  outline-offset: 2px;
}

@media (prefers-reduced-motion: reduce) {
  * {
    transition: none !important;
    animation: none !important;
  }
}
"#
        .to_string()
    }
}
