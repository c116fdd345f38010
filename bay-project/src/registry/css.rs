//! Structured view of the stylesheet aggregator.
//!
//! The stylesheet is read as a sequence of slots (comments, `@import` lines,
//! blank lines and everything else). Component stylesheets are registered
//! inside the block that follows the `Component Imports` label comment:
//!
//! ```css
//! /* ========================================
//!    Component Imports
//!    ======================================== */
//!
//! /* Import component styles */
//! @import url('../components/Card/Card.css');
//! ```

use std::path::Path;

use tracing::debug;

use super::text::{self, Insertion, Line};
use super::{Registered, import_source, read_registry, write_registry};
use crate::error::{EditError, RegisterError};

const COMPONENT_IMPORTS: &str = "Component Imports";
const IMPORT_OPENER: &str = "Import component styles";
const ACCESSIBILITY: &str = "Accessibility";

/// The `@import` line that registers a component stylesheet, `source` being
/// its path relative to the aggregator.
pub fn component_import_line(source: &str) -> String {
    format!("@import url('{}');", source)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    /// A comment spanning lines `first..=last`.
    Comment {
        first: usize,
        last: usize,
        label: String,
        banner: bool,
    },
    Import(usize),
    Blank(usize),
    Rule(usize),
}

/// Where the component import block lives and what it already holds.
#[derive(Debug)]
struct ImportBlock {
    label_last_line: usize,
    opener_last_line: Option<usize>,
    last_import_line: Option<usize>,
}

/// A parsed stylesheet aggregator.
pub struct StyleSheet<'a> {
    content: &'a str,
    lines: Vec<Line<'a>>,
    slots: Vec<Slot>,
}

impl<'a> StyleSheet<'a> {
    pub fn parse(content: &'a str) -> Self {
        let lines = text::lines(content);
        let slots = parse_slots(&lines);
        Self {
            content,
            lines,
            slots,
        }
    }

    /// Content with an import of `source`, the stylesheet of `component`, added.
    pub fn add_component_import(
        &self,
        component: &str,
        source: &str,
    ) -> Result<String, EditError> {
        let import = component_import_line(source);
        if self.content.contains(&import) {
            return Err(EditError::AlreadyRegistered(format!(
                "stylesheet of {}",
                component
            )));
        }

        let eol = text::line_ending(self.content);
        let insertion = match self.import_block() {
            Some(block) => {
                let anchor = block
                    .last_import_line
                    .or(block.opener_last_line)
                    .unwrap_or(block.label_last_line);
                debug!(line = anchor + 1, "adding import to existing block");
                Insertion::after_line(&self.lines[anchor], &import, eol)
            }
            None => self.new_block(&import, eol),
        };

        Ok(text::apply(self.content, vec![insertion]))
    }

    /// Insertion creating the whole import block, before the Accessibility
    /// section when there is one and at the end of the file otherwise.
    fn new_block(&self, import: &str, eol: &str) -> Insertion {
        let block = [
            "/* ========================================",
            "   Component Imports",
            "   ======================================== */",
            "",
            "/* Import component styles */",
            import,
        ]
        .join(eol);

        if let Some(first) = self.comment_first_line(ACCESSIBILITY) {
            debug!(line = first + 1, "creating import block before accessibility section");
            return Insertion {
                offset: self.lines[first].start,
                text: format!("{block}{eol}{eol}"),
            };
        }

        debug!("appending import block");
        let mut text = String::new();
        if !self.content.is_empty() {
            if !self.content.ends_with('\n') {
                text.push_str(eol);
            }
            text.push_str(eol);
        }
        text.push_str(&block);
        text.push_str(eol);
        Insertion {
            offset: self.content.len(),
            text,
        }
    }

    fn comment_first_line(&self, wanted: &str) -> Option<usize> {
        self.slots.iter().find_map(|slot| match slot {
            Slot::Comment { first, label, .. } if label.eq_ignore_ascii_case(wanted) => {
                Some(*first)
            }
            _ => None,
        })
    }

    fn import_block(&self) -> Option<ImportBlock> {
        let start = self.slots.iter().position(|slot| {
            matches!(slot, Slot::Comment { label, .. } if label.eq_ignore_ascii_case(COMPONENT_IMPORTS))
        })?;
        let Slot::Comment { last, .. } = &self.slots[start] else {
            return None;
        };

        let mut block = ImportBlock {
            label_last_line: *last,
            opener_last_line: None,
            last_import_line: None,
        };

        for slot in &self.slots[start + 1..] {
            match slot {
                Slot::Blank(_) => {}
                Slot::Import(line) => block.last_import_line = Some(*line),
                Slot::Comment {
                    last,
                    label,
                    banner: false,
                    ..
                } => {
                    if label.eq_ignore_ascii_case(IMPORT_OPENER) {
                        block.opener_last_line = Some(*last);
                    }
                }
                Slot::Comment { banner: true, .. } | Slot::Rule(_) => break,
            }
        }

        Some(block)
    }
}

/// Register the stylesheet at `css_file` in the aggregator at `path`.
///
/// On any error the file is left untouched.
pub fn register_component_css(
    path: &Path,
    component: &str,
    css_file: &Path,
) -> Result<Registered, RegisterError> {
    let source = import_source(path, css_file);
    let content = read_registry(path)?;
    let updated = StyleSheet::parse(&content)
        .add_component_import(component, &source)
        .map_err(|e| RegisterError::from_edit(path.to_path_buf(), e))?;
    write_registry(path, &updated)?;

    debug!(path = %path.display(), component, "component stylesheet registered");
    Ok(Registered {
        path: path.to_path_buf(),
        inserted: vec![component_import_line(&source)],
    })
}

fn parse_slots(lines: &[Line<'_>]) -> Vec<Slot> {
    let mut slots = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].text.trim_start();

        if let Some(rest) = trimmed.strip_prefix("/*") {
            let mut last = i;
            let mut body = lines[i].text.to_string();
            if !rest.contains("*/") {
                while last + 1 < lines.len() {
                    last += 1;
                    body.push('\n');
                    body.push_str(lines[last].text);
                    if lines[last].text.contains("*/") {
                        break;
                    }
                }
            }
            slots.push(Slot::Comment {
                first: i,
                last,
                label: comment_label(&body),
                banner: body.contains("=="),
            });
            i = last + 1;
            continue;
        }

        slots.push(if trimmed.starts_with("@import") {
            Slot::Import(i)
        } else if trimmed.is_empty() {
            Slot::Blank(i)
        } else {
            Slot::Rule(i)
        });
        i += 1;
    }

    slots
}

/// Comment text with delimiters, `=`/`*` decoration and extra whitespace removed.
fn comment_label(comment: &str) -> String {
    let inner = comment.split_once("/*").map_or(comment, |(_, rest)| rest);
    let inner = inner.rsplit_once("*/").map_or(inner, |(body, _)| body);
    inner
        .replace(['=', '*'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER_BLOCK: &str = "\
/* ========================================
   Component Imports
   ======================================== */

/* Import component styles */
@import url('../components/Card/Card.css');

/* ========================================
   Accessibility
   ======================================== */

:focus-visible {
  outline: 2px solid;
}
";

    #[test]
    fn test_comment_label() {
        assert_eq!(comment_label("/* Component Imports */"), "Component Imports");
        assert_eq!(
            comment_label("/* ====\n   Component Imports\n   ==== */"),
            "Component Imports"
        );
        assert_eq!(comment_label("/*=== Accessibility ===*/"), "Accessibility");
    }

    #[test]
    fn test_parse_slots() {
        let sheet = StyleSheet::parse(BANNER_BLOCK);
        assert_eq!(
            sheet.slots[0],
            Slot::Comment {
                first: 0,
                last: 2,
                label: "Component Imports".to_string(),
                banner: true,
            }
        );
        assert_eq!(sheet.slots[1], Slot::Blank(3));
        assert!(matches!(&sheet.slots[2], Slot::Comment { label, banner: false, .. } if label == IMPORT_OPENER));
        assert_eq!(sheet.slots[3], Slot::Import(5));
    }

    #[test]
    fn test_appends_after_last_import() {
        let updated = StyleSheet::parse(BANNER_BLOCK)
            .add_component_import("UserProfile", "../components/UserProfile/UserProfile.css")
            .unwrap();
        assert!(updated.contains(
            "@import url('../components/Card/Card.css');\n@import url('../components/UserProfile/UserProfile.css');\n\n/* ===="
        ));
    }

    #[test]
    fn test_inserts_after_opener_when_block_is_empty() {
        let content = "/* Component Imports */\n/* Import component styles */\n\n.app {\n}\n";
        let updated = StyleSheet::parse(content)
            .add_component_import("Card", "../components/Card/Card.css")
            .unwrap();
        assert_eq!(
            updated,
            "/* Component Imports */\n/* Import component styles */\n@import url('../components/Card/Card.css');\n\n.app {\n}\n"
        );
    }

    #[test]
    fn test_inserts_after_label_without_opener() {
        let content = "/* Component Imports */\n\nbody {}\n";
        let updated = StyleSheet::parse(content)
            .add_component_import("Card", "../components/Card/Card.css")
            .unwrap();
        assert_eq!(
            updated,
            "/* Component Imports */\n@import url('../components/Card/Card.css');\n\nbody {}\n"
        );
    }

    #[test]
    fn test_imports_after_block_end_are_ignored() {
        let content = "/* Component Imports */\n.a {}\n@import url('x.css');\n";
        let updated = StyleSheet::parse(content)
            .add_component_import("Card", "../components/Card/Card.css")
            .unwrap();
        assert!(updated.starts_with(
            "/* Component Imports */\n@import url('../components/Card/Card.css');\n.a {}"
        ));
    }

    #[test]
    fn test_creates_block_before_accessibility() {
        let content = "body {}\n\n/* ====\n   Accessibility\n   ==== */\n:focus {}\n";
        let updated = StyleSheet::parse(content)
            .add_component_import("Card", "../components/Card/Card.css")
            .unwrap();
        assert_eq!(
            updated,
            "body {}\n\n\
/* ========================================\n   Component Imports\n   ======================================== */\n\n\
/* Import component styles */\n@import url('../components/Card/Card.css');\n\n\
/* ====\n   Accessibility\n   ==== */\n:focus {}\n"
        );
    }

    #[test]
    fn test_appends_block_at_end() {
        let updated = StyleSheet::parse("body {}")
            .add_component_import("Card", "../components/Card/Card.css")
            .unwrap();
        assert_eq!(
            updated,
            "body {}\n\n\
/* ========================================\n   Component Imports\n   ======================================== */\n\n\
/* Import component styles */\n@import url('../components/Card/Card.css');\n"
        );
    }

    #[test]
    fn test_existing_import_is_rejected() {
        let err = StyleSheet::parse(BANNER_BLOCK)
            .add_component_import("Card", "../components/Card/Card.css")
            .unwrap_err();
        assert!(matches!(err, EditError::AlreadyRegistered(_)));
    }

    #[test]
    fn test_preserves_crlf() {
        let content = "/* Component Imports */\r\n/* Import component styles */\r\n";
        let updated = StyleSheet::parse(content)
            .add_component_import("Card", "../components/Card/Card.css")
            .unwrap();
        assert_eq!(
            updated,
            "/* Component Imports */\r\n/* Import component styles */\r\n@import url('../components/Card/Card.css');\r\n"
        );
    }
}
