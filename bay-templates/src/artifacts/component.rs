//! Component script and stylesheet templates.

use std::path::{Path, PathBuf};

use bay_core::{ArtifactName, FileRules, GeneratedFile};

/// A component script at `<components>/<Class>/<Class>.js`.
#[derive(Debug, Clone)]
pub struct ComponentJs {
    pub class_name: String,
    pub css_class_name: String,
    pub include_state: bool,
    pub include_lifecycle: bool,
}

impl ComponentJs {
    pub fn new(name: &ArtifactName) -> Self {
        Self {
            class_name: name.pascal().to_string(),
            css_class_name: name.kebab().to_string(),
            include_state: true,
            include_lifecycle: true,
        }
    }

    pub fn with_state(mut self, include_state: bool) -> Self {
        self.include_state = include_state;
        self
    }

    pub fn with_lifecycle(mut self, include_lifecycle: bool) -> Self {
        self.include_lifecycle = include_lifecycle;
        self
    }

    fn render_state(&self) -> &'static str {
        if self.include_state {
            r#"
    // Component state
    this.state = {
      count: 0
    };"#
        } else {
            ""
        }
    }

    fn render_body(&self) -> String {
        let css = &self.css_class_name;
        if self.include_state {
            format!(
                r#"<p>Count: ${{count}}</p>
        </div>

        <div class="{css}__actions">
          <button class="{css}__btn" data-action="increment">Increment</button>
        </div>"#
            )
        } else {
            "<p>Component content here</p>\n        </div>".to_string()
        }
    }

    fn render_listeners(&self) -> String {
        if self.include_state {
            r#"
    const btn = this.element.querySelector('[data-action="increment"]');

    if (btn) {
      btn.addEventListener('click', () => {
        this.setState({ count: this.state.count + 1 });
      });
    }"#
            .to_string()
        } else {
            format!(
                r#"
    // Add event listeners here
    // Example:
    // const btn = this.element.querySelector('.{}__btn');
    // btn?.addEventListener('click', () => {{ ... }});"#,
                self.css_class_name
            )
        }
    }

    fn render_lifecycle(&self) -> String {
        if !self.include_lifecycle {
            return String::new();
        }
        let class = &self.class_name;
        format!(
            r#"
  /**
   * Called when component is created
   */
  onCreate() {{
    console.log('{class} created');
  }}

  /**
   * Called after component is mounted to DOM
   */
  onMount() {{
    console.log('{class} mounted');
  }}

  /**
   * Called before component is removed from DOM
   */
  onDestroy() {{
    console.log('{class} destroyed');
    // Clean up event listeners, timers, etc.
  }}
"#
        )
    }
}

impl GeneratedFile for ComponentJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.class_name)
            .join(format!("{}.js", self.class_name))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let class = &self.class_name;
        let css = &self.css_class_name;
        let count_binding = if self.include_state {
            "\n    const { count } = this.state;"
        } else {
            ""
        };

        format!(
            r#"/**
 * {class} Component
 * Reusable component with props and state
 */
import {{ Component }} from '../Component.js';

export class {class} extends Component {{
  constructor(props = {{}}) {{
    super({{
      // Default props
      title: 'Default Title',
      variant: 'default',
      ...props
    }});
{state}
  }}

  /**
   * Render component HTML
   * @returns {{string}} HTML content
   */
  render() {{
    const {{ title, variant }} = this.props;{count_binding}

    return `
      <div class="{css} {css}--${{variant}}" data-component="{css}">
        <div class="{css}__header">
          <h3 class="{css}__title">${{this.escapeHTML(title)}}</h3>
        </div>

        <div class="{css}__content">
          {body}
      </div>
    `;
  }}

  /**
   * Attach event listeners after mounting
   */
  attachEventListeners() {{{listeners}
  }}
{lifecycle}}}
"#,
            state = self.render_state(),
            body = self.render_body(),
            listeners = self.render_listeners(),
            lifecycle = self.render_lifecycle(),
        )
    }
}

/// The stylesheet that sits next to a component script.
#[derive(Debug, Clone)]
pub struct ComponentCss {
    pub class_name: String,
    pub css_class_name: String,
}

impl ComponentCss {
    pub fn new(name: &ArtifactName) -> Self {
        Self {
            class_name: name.pascal().to_string(),
            css_class_name: name.kebab().to_string(),
        }
    }
}

impl GeneratedFile for ComponentCss {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.class_name)
            .join(format!("{}.css", self.class_name))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let css = &self.css_class_name;
        format!(
            r#"/* {css} Component Styles */

.{css} {{
  padding: 1.5rem;
  border: 1px solid var(--border-color);
  border-radius: var(--border-radius);
  background-color: white;
}}

.{css}__header {{
  margin-bottom: 1rem;
}}

.{css}__title {{
  margin: 0;
  color: var(--primary-color);
  font-size: 1.25rem;
}}

.{css}__content {{
  margin: 1rem 0;
  color: var(--text-color);
}}

.{css}__actions {{
  margin-top: 1rem;
  display: flex;
  gap: 0.5rem;
}}

.{css}__btn {{
  padding: 0.5rem 1rem;
  background-color: var(--accent-color);
  color: white;
  border: none;
  border-radius: var(--border-radius);
  cursor: pointer;
  transition: var(--transition);
}}

.{css}__btn:hover {{
  background-color: #45a049;
}}

/* Variants */
.{css}--primary {{
  border-color: var(--accent-color);
}}

.{css}--secondary {{
  border-color: var(--secondary-color);
}}

.{css}--outlined {{
  background-color: transparent;
}}

.{css}--elevated {{
  box-shadow: var(--shadow-lg);
  border: none;
}}
"#
        )
    }
}
