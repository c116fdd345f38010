//! Router and route registry of a new project.

use std::path::{Path, PathBuf};

use bay_core::{FileRules, GeneratedFile, layout};

/// `src/app/global-scope.js`: the route table.
///
/// `bay generate:page` inserts an import after the `NotFound` import and a
/// `new Page()` entry before `new NotFound()`, which must stay last.
pub struct GlobalScopeJs;

impl GeneratedFile for GlobalScopeJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(layout::ROUTES)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"/**
 * Application routes.
 * Keep NotFound as the last route: it matches every path.
 */
import { EnhancedRoutes } from './router.js';
import { Home } from '../pages/home/home.js';
import { NotFound } from '../pages/not-found/not-found.js';

const routes = new EnhancedRoutes([
  new Home(),
  new NotFound()
]);

routes.start('#app');

export { routes };
"#
        .to_string()
    }
}

/// `src/app/router.js`: history-based router over page objects.
pub struct RouterJs;

impl GeneratedFile for RouterJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(layout::SRC_DIR).join("app").join("router.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"/**
 * Minimal history-based router.
 * Each page exposes `paths` and `getPageContent()`. The first page whose
 * paths match the current location is rendered; '*' matches anything.
 */
export class EnhancedRoutes {
  constructor(pages) {
    this.pages = pages;
    this.outlet = null;
  }

  match(pathname) {
    const path = pathname.replace(/^\/+|\/+$/g, '');
    return this.pages.find((page) =>
      page.paths.some((candidate) => candidate === '*' || candidate === path)
    );
  }

  async render(pathname = window.location.pathname) {
    const page = this.match(pathname);
    if (!page || !this.outlet) {
      return;
    }

    document.title = page.seoConfig?.title ?? page.title;
    this.outlet.innerHTML = await page.getPageContent();
  }

  navigate(pathname) {
    window.history.pushState({}, '', pathname);
    return this.render(pathname);
  }

  start(selector = '#app') {
    this.outlet = document.querySelector(selector);
    window.addEventListener('popstate', () => this.render());
    window.navigate = (event, path) => {
      event.preventDefault();
      this.navigate(`/${path}`);
    };
    return this.render();
  }
}
"#
        .to_string()
    }
}
