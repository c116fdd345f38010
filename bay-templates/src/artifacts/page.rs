//! Page script template.

use std::path::{Path, PathBuf};

use bay_core::{ArtifactName, FileRules, GeneratedFile};

use crate::escape::{single_quoted, template_literal};

/// A page script at `<pages>/<folder>/<folder>.js`.
#[derive(Debug, Clone)]
pub struct PageJs {
    pub class_name: String,
    pub folder_name: String,
    pub url_path: String,
    pub title: String,
    pub description: String,
    pub include_seo: bool,
}

impl PageJs {
    /// Page for `name` with the default path, title and description.
    pub fn new(name: &ArtifactName) -> Self {
        let class_name = name.pascal().to_string();
        Self {
            url_path: name.kebab().to_string(),
            folder_name: name.kebab().to_string(),
            title: format!("{} Page", class_name),
            description: format!("{} page description", class_name),
            include_seo: true,
            class_name,
        }
    }

    pub fn with_url_path(mut self, url_path: impl Into<String>) -> Self {
        self.url_path = url_path.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_seo(mut self, include_seo: bool) -> Self {
        self.include_seo = include_seo;
        self
    }

    /// Path of the page file relative to the pages directory.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.folder_name).join(format!("{}.js", self.folder_name))
    }

    fn render_seo(&self) -> String {
        if !self.include_seo {
            return String::new();
        }
        format!(
            r#"
  // SEO Configuration
  seoConfig = {{
    title: '{title}',
    description: '{description}',
    keywords: '{keywords}, page, spa',
    type: 'website'
  }};
"#,
            title = single_quoted(&self.title),
            description = single_quoted(&self.description),
            keywords = single_quoted(&self.url_path),
        )
    }
}

impl GeneratedFile for PageJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let class = &self.class_name;
        let title = single_quoted(&self.title);
        let description = single_quoted(&self.description);
        let html_title = template_literal(&self.title);
        let html_description = template_literal(&self.description);

        format!(
            r#"/**
 * {class} Page
 * {doc_description}
 */
export class {class} {{
  // URL paths for this page
  paths = ['{url_path}'];

  // Page metadata
  title = '{title}';
  description = '{description}';
{seo}
  constructor() {{
    // Initialize page state if needed
  }}

  /**
   * Get page content
   * @returns {{Promise<string>}} HTML content
   */
  async getPageContent() {{
    return `
      <div class="page-container">
        <header class="page-header">
          <h1>{html_title}</h1>
          <p class="subtitle">{html_description}</p>
        </header>

        <section class="content-section">
          <p>Welcome to {class} page!</p>

          <!-- Add your content here -->

        </section>
      </div>

      <style>
        .content-section {{
          margin-top: 2rem;
        }}
      </style>

      <script type="module">
        // Add page-specific JavaScript here
        console.log('{class} page loaded');
      </script>
    `;
  }}
}}
"#,
            doc_description = self.description.replace("*/", "* /"),
            url_path = single_quoted(&self.url_path),
            seo = self.render_seo(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_us() -> PageJs {
        PageJs::new(&ArtifactName::new("Contact Us"))
    }

    #[test]
    fn test_defaults_from_name() {
        let page = contact_us();
        assert_eq!(page.class_name, "ContactUs");
        assert_eq!(page.folder_name, "contact-us");
        assert_eq!(page.url_path, "contact-us");
        assert_eq!(page.title, "ContactUs Page");
        assert_eq!(page.description, "ContactUs page description");
        assert!(page.include_seo);
    }

    #[test]
    fn test_path() {
        let page = contact_us();
        assert_eq!(
            page.path(Path::new("src/pages")),
            PathBuf::from("src/pages/contact-us/contact-us.js")
        );
    }

    #[test]
    fn test_render_with_seo() {
        let content = contact_us().render();
        assert!(content.contains("export class ContactUs {"));
        assert!(content.contains("paths = ['contact-us'];"));
        assert!(content.contains("seoConfig = {"));
        assert!(content.contains("keywords: 'contact-us, page, spa',"));
        assert!(content.contains("<h1>ContactUs Page</h1>"));
    }

    #[test]
    fn test_render_without_seo_omits_block() {
        let content = contact_us().with_seo(false).render();
        assert!(!content.contains("seoConfig"));
        assert!(!content.contains("SEO Configuration"));
        assert_eq!(
            content.matches('{').count(),
            content.matches('}').count(),
            "unbalanced braces:\n{content}"
        );
    }

    #[test]
    fn test_render_custom_options() {
        let content = contact_us()
            .with_url_path("contact")
            .with_title("Get in touch")
            .with_description("Reach the team")
            .render();
        assert!(content.contains("paths = ['contact'];"));
        assert!(content.contains("title = 'Get in touch';"));
        assert!(content.contains("<p class=\"subtitle\">Reach the team</p>"));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let content = contact_us().with_title("Let's talk").render();
        assert!(content.contains("title = 'Let\\'s talk';"));
        assert!(content.contains("<h1>Let's talk</h1>"));
    }
}
