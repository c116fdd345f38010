//! Generator listing.

use super::output::{Output, Report};

/// The commands a user reaches for, with their short form.
#[derive(Debug)]
pub struct ListReport {
    pub entries: Vec<ListEntry>,
}

#[derive(Debug)]
pub struct ListEntry {
    pub label: &'static str,
    pub usage: &'static str,
}

impl Default for ListReport {
    fn default() -> Self {
        let entry = |label, usage| ListEntry { label, usage };
        Self {
            entries: vec![
                entry("Init", "bay init <project-name>"),
                entry("Pages", "bay generate:page <name>      (g:page)"),
                entry("Components", "bay generate:component <name> (g:component)"),
                entry("Services", "bay generate:service <name>   (g:service)"),
            ],
        }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Available commands");
        for entry in &self.entries {
            out.key_value(entry.label, entry.usage);
        }
        out.newline();
        out.info("Use --help with any command for more options");
    }
}
