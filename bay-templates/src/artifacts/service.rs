//! API service template.

use std::path::{Path, PathBuf};

use bay_core::{ArtifactName, FileRules, GeneratedFile};

use crate::escape::single_quoted;

/// Base URL written into services when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// An API service module at `<services>/<file>.js`.
#[derive(Debug, Clone)]
pub struct ServiceJs {
    pub class_name: String,
    pub file_name: String,
    /// Exported object identifier, e.g. `userProfileService`.
    pub object_name: String,
    pub base_url: String,
}

impl ServiceJs {
    pub fn new(name: &ArtifactName) -> Self {
        Self {
            class_name: name.pascal().to_string(),
            file_name: name.kebab().to_string(),
            object_name: format!("{}Service", name.camel()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl GeneratedFile for ServiceJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.js", self.file_name))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let class = &self.class_name;
        let file = &self.file_name;
        let object = &self.object_name;

        format!(
            r#"/**
 * {class} Service
 * Service for {file} API endpoints
 */
import {{ apiService }} from './api-service.js';

/**
 * Base URL for {file} API
 */
const BASE_URL = '{base_url}';

/**
 * {class} Service
 * Handles all {file}-related API calls
 */
export const {object} = {{
  /**
   * Get all {file} items
   * @returns {{Promise<Array>}} Array of items
   */
  async getAll() {{
    try {{
      const response = await apiService.get(`${{BASE_URL}}/{file}`);
      return response;
    }} catch (error) {{
      console.error('Error fetching {file}:', error);
      throw error;
    }}
  }},

  /**
   * Get {file} item by ID
   * @param {{number|string}} id - Item ID
   * @returns {{Promise<Object>}} Item data
   */
  async getById(id) {{
    try {{
      const response = await apiService.get(`${{BASE_URL}}/{file}/${{id}}`);
      return response;
    }} catch (error) {{
      console.error(`Error fetching {file} ${{id}}:`, error);
      throw error;
    }}
  }},

  /**
   * Create new {file} item
   * @param {{Object}} data - Item data
   * @returns {{Promise<Object>}} Created item
   */
  async create(data) {{
    try {{
      const response = await apiService.post(`${{BASE_URL}}/{file}`, data);
      return response;
    }} catch (error) {{
      console.error('Error creating {file}:', error);
      throw error;
    }}
  }},

  /**
   * Update {file} item
   * @param {{number|string}} id - Item ID
   * @param {{Object}} data - Updated data
   * @returns {{Promise<Object>}} Updated item
   */
  async update(id, data) {{
    try {{
      const response = await apiService.put(`${{BASE_URL}}/{file}/${{id}}`, data);
      return response;
    }} catch (error) {{
      console.error(`Error updating {file} ${{id}}:`, error);
      throw error;
    }}
  }},

  /**
   * Delete {file} item
   * @param {{number|string}} id - Item ID
   * @returns {{Promise<void>}}
   */
  async delete(id) {{
    try {{
      await apiService.delete(`${{BASE_URL}}/{file}/${{id}}`);
    }} catch (error) {{
      console.error(`Error deleting {file} ${{id}}:`, error);
      throw error;
    }}
  }},

  /**
   * Search {file} items
   * @param {{string}} query - Search query
   * @returns {{Promise<Array>}} Search results
   */
  async search(query) {{
    try {{
      const response = await apiService.get(`${{BASE_URL}}/{file}/search?q=${{encodeURIComponent(query)}}`);
      return response;
    }} catch (error) {{
      console.error('Error searching {file}:', error);
      throw error;
    }}
  }}
}};
"#,
            base_url = single_quoted(&self.base_url),
        )
    }
}
