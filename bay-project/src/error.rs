use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for bay.toml loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for bay.toml error reporting.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at the assignment of `key` when
    /// there is one.
    pub fn validation_error(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        let span = find_key(&self.src, key).map(|offset| SourceSpan::from((offset, key.len())));
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

/// Byte offset of `key` on a line assigning it, as `key = ...` or a dotted
/// `table.key = ...`.
fn find_key(src: &str, key: &str) -> Option<usize> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        if let Some((lhs, _)) = line.split_once('=') {
            let name = lhs.rsplit('.').next().unwrap_or(lhs);
            if name.trim() == key {
                let leading = name.len() - name.trim_start().len();
                return Some(offset + lhs.len() - name.len() + leading);
            }
        }
        offset += line.len();
    }
    None
}

/// Errors loading the project configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(help("check that the file is readable, or delete it to use the default layout"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse bay.toml")]
    #[diagnostic(code(bay::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(
        code(bay::validation_error),
        help("paths in bay.toml are relative to the project root")
    )]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Why a registry edit could not be computed.
///
/// Produced by the pure parsers; the registrars attach the file path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{0} is already registered")]
    AlreadyRegistered(String),

    #[error("anchor '{0}' not found")]
    AnchorNotFound(&'static str),

    #[error("route table 'new EnhancedRoutes([...])' not found")]
    RouteTableNotFound,
}

/// A registration that did not modify the registry file.
///
/// Every variant leaves the file byte-for-byte unchanged.
#[derive(Debug, Error, Diagnostic)]
pub enum RegisterError {
    #[error("'{}' not found", path.display())]
    #[diagnostic(
        code(bay::registry::missing),
        help("run the command from the project root, or set the path in bay.toml")
    )]
    Missing { path: PathBuf },

    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{what} is already registered in '{}'", path.display())]
    #[diagnostic(code(bay::registry::duplicate))]
    AlreadyRegistered { path: PathBuf, what: String },

    #[error("could not find '{anchor}' in '{}'", path.display())]
    #[diagnostic(
        code(bay::registry::anchor),
        help("the file no longer has the structure bay expects; add the reference by hand")
    )]
    AnchorNotFound { path: PathBuf, anchor: &'static str },

    #[error("could not find the route table in '{}'", path.display())]
    #[diagnostic(
        code(bay::registry::route_table),
        help("routes are expected in a 'new EnhancedRoutes([...])' call")
    )]
    RouteTableNotFound { path: PathBuf },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RegisterError {
    pub(crate) fn from_edit(path: PathBuf, err: EditError) -> Self {
        match err {
            EditError::AlreadyRegistered(what) => Self::AlreadyRegistered { path, what },
            EditError::AnchorNotFound(anchor) => Self::AnchorNotFound { path, anchor },
            EditError::RouteTableNotFound => Self::RouteTableNotFound { path },
        }
    }

    /// Whether the reference was already present.
    pub fn is_already_registered(&self) -> bool {
        matches!(self, Self::AlreadyRegistered { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_skips_values() {
        let src = "[paths]\nroutes = \"src/pages/r.js\"\npages = \"/abs\"\n";
        let offset = find_key(src, "pages").unwrap();
        assert_eq!(&src[offset..offset + 5], "pages");
        assert!(src[..offset].ends_with("\n"));
    }

    #[test]
    fn test_find_key_dotted() {
        let src = "paths.components = \"\"\n";
        assert_eq!(find_key(src, "components"), Some(6));
        assert_eq!(find_key(src, "pages"), None);
    }

    #[test]
    fn test_validation_error_span() {
        let src = "[paths]\nroutes = \"src/pages/r.js\"\n  pages = \"/abs\"\n";
        let err = SourceContext::new(src, "bay.toml").validation_error("bad", "pages");
        let Error::Validation { span, .. } = *err else {
            panic!("expected a validation error");
        };
        let span = span.unwrap();
        assert_eq!(span.offset(), src.find("  pages").unwrap() + 2);
        assert_eq!(span.len(), 5);
    }
}
