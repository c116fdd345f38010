//! Shared runtime modules used by generated components and services.

use std::path::{Path, PathBuf};

use bay_core::{FileRules, GeneratedFile, layout};

/// `src/components/Component.js`: base class of generated components.
pub struct ComponentBaseJs;

impl GeneratedFile for ComponentBaseJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(layout::COMPONENTS_DIR).join("Component.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"/**
 * Base class for components.
 * Subclasses implement render() and may define onCreate, onMount and onDestroy.
 */
export class Component {
  constructor(props = {}) {
    this.props = props;
    this.state = {};
    this.element = null;

    if (typeof this.onCreate === 'function') {
      this.onCreate();
    }
  }

  render() {
    return '';
  }

  attachEventListeners() {}

  mount(target) {
    const container = typeof target === 'string' ? document.querySelector(target) : target;
    if (!container) {
      throw new Error(`Mount target not found: ${target}`);
    }

    container.innerHTML = this.render();
    this.element = container.firstElementChild;
    this.attachEventListeners();

    if (typeof this.onMount === 'function') {
      this.onMount();
    }
    return this;
  }

  setState(partial) {
    this.state = { ...this.state, ...partial };
    this.update();
  }

  update() {
    if (!this.element) {
      return;
    }

    const container = this.element.parentElement;
    container.innerHTML = this.render();
    this.element = container.firstElementChild;
    this.attachEventListeners();
  }

  destroy() {
    if (typeof this.onDestroy === 'function') {
      this.onDestroy();
    }
    this.element?.remove();
    this.element = null;
  }

  escapeHTML(value) {
    return String(value)
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;')
      .replace(/"/g, '&quot;')
      .replace(/'/g, '&#39;');
  }
}
"#
        .to_string()
    }
}

/// `src/services/api-service.js`: fetch wrapper used by generated services.
pub struct ApiServiceJs;

impl GeneratedFile for ApiServiceJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(layout::SERVICES_DIR).join("api-service.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"/**
 * Thin fetch wrapper returning parsed JSON and throwing on HTTP errors.
 */
async function request(method, url, data) {
  const options = {
    method,
    headers: { 'Content-Type': 'application/json' }
  };
  if (data !== undefined) {
    options.body = JSON.stringify(data);
  }

  const response = await fetch(url, options);
  if (!response.ok) {
    throw new Error(`${method} ${url} failed with status ${response.status}`);
  }
  if (response.status === 204) {
    return null;
  }
  return response.json();
}

export const apiService = {
  get: (url) => request('GET', url),
  post: (url, data) => request('POST', url, data),
  put: (url, data) => request('PUT', url, data),
  delete: (url) => request('DELETE', url)
};
"#
        .to_string()
    }
}
