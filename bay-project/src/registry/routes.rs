//! Structured view of the route registry.
//!
//! The registry imports every page class and lists an instance of each in
//! a `new EnhancedRoutes([...])` table. `NotFound` matches every path, so new
//! pages are always inserted before it.

use std::path::Path;

use tracing::debug;

use super::js::{Token, TokenKind, tokenize};
use super::text::{self, Insertion, Line};
use super::{Registered, import_source, read_registry, write_registry};
use crate::error::{EditError, RegisterError};

const NOT_FOUND: &str = "NotFound";
const NOT_FOUND_SOURCE: &str = "not-found";
const ROUTE_TABLE: &str = "EnhancedRoutes";

/// The import statement for a generated page, `source` being its module path
/// relative to the registry.
pub fn page_import_line(class_name: &str, source: &str) -> String {
    format!("import {{ {} }} from '{}';", class_name, source)
}

/// The route table entry for a generated page.
pub fn route_entry(class_name: &str) -> String {
    format!("new {}(),", class_name)
}

/// An `import ... from '<source>'` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Import<'a> {
    names: Vec<&'a str>,
    source: &'a str,
    end: usize,
}

/// Token index range of one top-level route table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    first: usize,
    last: usize,
}

/// A parsed route registry.
pub struct RouteRegistry<'a> {
    content: &'a str,
    lines: Vec<Line<'a>>,
    tokens: Vec<Token<'a>>,
    imports: Vec<Import<'a>>,
    /// `None` when the table is absent or unterminated.
    entries: Option<Vec<Entry>>,
}

impl<'a> RouteRegistry<'a> {
    pub fn parse(content: &'a str) -> Self {
        let tokens = tokenize(content);
        let imports = parse_imports(&tokens);
        let entries = parse_route_table(&tokens);
        Self {
            content,
            lines: text::lines(content),
            tokens,
            imports,
            entries,
        }
    }

    /// Content with the page imported from `source` and routed before `NotFound`.
    pub fn add_page(&self, class_name: &str, source: &str) -> Result<String, EditError> {
        if self
            .imports
            .iter()
            .any(|import| import.source == source || import.names.contains(&class_name))
        {
            return Err(EditError::AlreadyRegistered(format!("route for {}", class_name)));
        }

        let anchor = self
            .imports
            .iter()
            .find(|import| {
                import.names.contains(&NOT_FOUND) && import.source.contains(NOT_FOUND_SOURCE)
            })
            .ok_or(EditError::AnchorNotFound("NotFound import"))?;

        let entries = self.entries.as_ref().ok_or(EditError::RouteTableNotFound)?;
        let not_found = entries
            .iter()
            .find(|entry| self.is_instance_of(entry, NOT_FOUND))
            .ok_or(EditError::AnchorNotFound("new NotFound()"))?;

        let eol = text::line_ending(self.content);
        let import_line = self.line_of(anchor.end - 1)?;
        let import = Insertion::after_line(
            &self.lines[import_line],
            &page_import_line(class_name, source),
            eol,
        );
        let entry = self.entry_insertion(not_found, class_name, eol)?;

        debug!(
            import_line = import_line + 1,
            entry_offset = entry.offset,
            "registering route"
        );
        Ok(text::apply(self.content, vec![import, entry]))
    }

    /// Class names instantiated in the route table, in order.
    pub fn routes(&self) -> Vec<&'a str> {
        let Some(entries) = &self.entries else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|entry| {
                let new = self.tokens.get(entry.first)?;
                let class = self.tokens.get(entry.first + 1)?;
                (new.is_ident("new") && class.kind == TokenKind::Ident).then_some(class.text)
            })
            .collect()
    }

    fn is_instance_of(&self, entry: &Entry, class_name: &str) -> bool {
        entry.last > entry.first
            && self.tokens[entry.first].is_ident("new")
            && self.tokens[entry.first + 1].is_ident(class_name)
    }

    fn line_of(&self, offset: usize) -> Result<usize, EditError> {
        text::line_at(&self.lines, offset).ok_or(EditError::RouteTableNotFound)
    }

    /// Insertion placing `new <Class>(),` before the anchor entry, on its own
    /// line when the anchor starts its line.
    fn entry_insertion(
        &self,
        anchor: &Entry,
        class_name: &str,
        eol: &str,
    ) -> Result<Insertion, EditError> {
        let offset = self.tokens[anchor.first].start;
        let line = &self.lines[self.line_of(offset)?];
        let indent = line.indent();

        if line.start + indent.len() == offset {
            Ok(Insertion {
                offset: line.start,
                text: format!("{}{}{}", indent, route_entry(class_name), eol),
            })
        } else {
            Ok(Insertion {
                offset,
                text: format!("{} ", route_entry(class_name)),
            })
        }
    }
}

/// Register the page module at `page_file` in the route registry at `path`.
///
/// On any error the file is left untouched.
pub fn register_route(
    path: &Path,
    class_name: &str,
    page_file: &Path,
) -> Result<Registered, RegisterError> {
    let source = import_source(path, page_file);
    let content = read_registry(path)?;
    let updated = RouteRegistry::parse(&content)
        .add_page(class_name, &source)
        .map_err(|e| RegisterError::from_edit(path.to_path_buf(), e))?;
    write_registry(path, &updated)?;

    debug!(path = %path.display(), class_name, "route registered");
    Ok(Registered {
        path: path.to_path_buf(),
        inserted: vec![page_import_line(class_name, &source), route_entry(class_name)],
    })
}

fn parse_imports<'a>(tokens: &[Token<'a>]) -> Vec<Import<'a>> {
    let mut imports = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let is_statement = tokens[i].is_ident("import")
            && (i == 0 || !tokens[i - 1].is_punct('.'))
            && !tokens
                .get(i + 1)
                .is_some_and(|t| t.is_punct('(') || t.is_punct('.'));
        if !is_statement {
            i += 1;
            continue;
        }

        let mut names = Vec::new();
        let mut j = i + 1;
        let mut source = None;
        while let Some(token) = tokens.get(j) {
            match token.kind {
                TokenKind::Str => {
                    source = Some(token);
                    break;
                }
                TokenKind::Ident if !matches!(token.text, "from" | "as" | "type") => {
                    names.push(token.text)
                }
                TokenKind::Punct(';') => break,
                _ => {}
            }
            j += 1;
        }

        if let Some(source) = source {
            let end = match tokens.get(j + 1) {
                Some(semi) if semi.is_punct(';') => {
                    j += 1;
                    semi.end
                }
                _ => source.end,
            };
            imports.push(Import {
                names,
                source: source.text,
                end,
            });
        }
        i = j + 1;
    }

    imports
}

/// Top-level entries of the first `new EnhancedRoutes([...])` table.
fn parse_route_table(tokens: &[Token<'_>]) -> Option<Vec<Entry>> {
    let open = tokens.windows(4).position(|w| {
        w[0].is_ident("new") && w[1].is_ident(ROUTE_TABLE) && w[2].is_punct('(') && w[3].is_punct('[')
    })? + 4;

    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut first = None;

    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::Punct(']') if depth == 0 => {
                if let Some(first) = first {
                    entries.push(Entry { first, last: i - 1 });
                }
                return Some(entries);
            }
            TokenKind::Punct(',') if depth == 0 => {
                if let Some(first) = first.take() {
                    entries.push(Entry { first, last: i - 1 });
                }
                continue;
            }
            TokenKind::Punct('[' | '(' | '{') => depth += 1,
            TokenKind::Punct(']' | ')' | '}') => depth = depth.saturating_sub(1),
            _ => {}
        }
        first.get_or_insert(i);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = "\
import { EnhancedRoutes } from './router.js';
import { Home } from '../pages/home/home.js';
import { NotFound } from '../pages/not-found/not-found.js';

const routes = new EnhancedRoutes([
  new Home(),
  new NotFound()
]);
";

    #[test]
    fn test_parse_imports() {
        let registry = RouteRegistry::parse(REGISTRY);
        let sources: Vec<_> = registry.imports.iter().map(|i| i.source).collect();
        assert_eq!(
            sources,
            vec![
                "./router.js",
                "../pages/home/home.js",
                "../pages/not-found/not-found.js"
            ]
        );
        assert_eq!(registry.imports[2].names, vec!["NotFound"]);
    }

    #[test]
    fn test_parse_route_table() {
        let registry = RouteRegistry::parse(REGISTRY);
        assert_eq!(registry.routes(), vec!["Home", "NotFound"]);
    }

    #[test]
    fn test_route_table_trailing_comma() {
        let registry = RouteRegistry::parse("new EnhancedRoutes([new A({ x: [1, 2] }), new B(),])");
        assert_eq!(registry.routes(), vec!["A", "B"]);
    }

    #[test]
    fn test_add_page() {
        let updated = RouteRegistry::parse(REGISTRY)
            .add_page("ContactUs", "../pages/contact-us/contact-us.js")
            .unwrap();
        assert_eq!(
            updated,
            "\
import { EnhancedRoutes } from './router.js';
import { Home } from '../pages/home/home.js';
import { NotFound } from '../pages/not-found/not-found.js';
import { ContactUs } from '../pages/contact-us/contact-us.js';

const routes = new EnhancedRoutes([
  new Home(),
  new ContactUs(),
  new NotFound()
]);
"
        );
    }

    #[test]
    fn test_add_page_inline_table() {
        let content = "import { NotFound } from \"../pages/not-found/not-found.js\"\nnew EnhancedRoutes([new Home(), new NotFound()]);";
        let updated = RouteRegistry::parse(content)
            .add_page("About", "../pages/about/about.js")
            .unwrap();
        assert_eq!(
            updated,
            "import { NotFound } from \"../pages/not-found/not-found.js\"\nimport { About } from '../pages/about/about.js';\nnew EnhancedRoutes([new Home(), new About(), new NotFound()]);"
        );
    }

    #[test]
    fn test_duplicate_with_double_quotes() {
        let content = REGISTRY.replace(
            "import { Home } from '../pages/home/home.js';",
            "import { Home } from \"../pages/home/home.js\";",
        );
        let err = RouteRegistry::parse(&content)
            .add_page("Home", "../pages/home/home.js")
            .unwrap_err();
        assert!(matches!(err, EditError::AlreadyRegistered(_)));
    }

    #[test]
    fn test_class_already_imported_from_elsewhere() {
        let content = REGISTRY.replace(
            "import { Home } from '../pages/home/home.js';",
            "import { Home } from './legacy/home.js';",
        );
        let err = RouteRegistry::parse(&content)
            .add_page("Home", "../pages/home/home.js")
            .unwrap_err();
        assert!(matches!(err, EditError::AlreadyRegistered(_)));
    }

    #[test]
    fn test_add_page_with_custom_source() {
        let updated = RouteRegistry::parse(REGISTRY)
            .add_page("About", "./views/about/about.js")
            .unwrap();
        assert!(updated.contains(
            "import { NotFound } from '../pages/not-found/not-found.js';\nimport { About } from './views/about/about.js';\n"
        ));
    }

    #[test]
    fn test_missing_not_found_import() {
        let content = REGISTRY.replace(
            "import { NotFound } from '../pages/not-found/not-found.js';\n",
            "",
        );
        let err = RouteRegistry::parse(&content)
            .add_page("About", "../pages/about/about.js")
            .unwrap_err();
        assert_eq!(err, EditError::AnchorNotFound("NotFound import"));
    }

    #[test]
    fn test_missing_not_found_entry() {
        let content = REGISTRY.replace("  new NotFound()\n", "");
        let err = RouteRegistry::parse(&content)
            .add_page("About", "../pages/about/about.js")
            .unwrap_err();
        assert_eq!(err, EditError::AnchorNotFound("new NotFound()"));
    }

    #[test]
    fn test_commented_out_entry_is_not_an_anchor() {
        let content = REGISTRY.replace("  new NotFound()\n", "  // new NotFound()\n");
        let err = RouteRegistry::parse(&content)
            .add_page("About", "../pages/about/about.js")
            .unwrap_err();
        assert_eq!(err, EditError::AnchorNotFound("new NotFound()"));
    }

    #[test]
    fn test_unterminated_table() {
        let content = REGISTRY.replace("]);", ");");
        let err = RouteRegistry::parse(&content)
            .add_page("About", "../pages/about/about.js")
            .unwrap_err();
        assert_eq!(err, EditError::RouteTableNotFound);
    }
}
