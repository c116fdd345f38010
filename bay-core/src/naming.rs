//! Case conversion for user-supplied artifact names.

/// Whether `c` separates words in a raw artifact name.
fn is_word_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Convert a string to PascalCase (e.g., "user profile" -> "UserProfile")
///
/// Runs of `-`, `_` and whitespace are dropped and the character after each
/// run is upper-cased. The first character of the result is always
/// upper-cased; every other character keeps its case.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = true;

    for c in s.chars() {
        if is_word_separator(c) {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert a string to kebab-case (e.g., "UserProfile" -> "user-profile")
///
/// A hyphen is inserted between a lower-case letter and a directly following
/// upper-case letter, runs of whitespace and underscores become a single
/// hyphen, and the result is lower-cased.
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_gap = false;

    for c in s.chars() {
        if c == '_' || c.is_whitespace() {
            if !in_gap {
                result.push('-');
                in_gap = true;
            }
            prev = Some(c);
            continue;
        }
        in_gap = false;

        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            result.push('-');
        }
        result.extend(c.to_lowercase());
        prev = Some(c);
    }

    result
}

/// Convert a string to camelCase (e.g., "user profile" -> "userProfile")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// A raw artifact name together with its derived identifiers.
///
/// The derived forms are computed once on construction and are pure
/// functions of the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    raw: String,
    pascal: String,
    kebab: String,
    camel: String,
}

impl ArtifactName {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            pascal: to_pascal_case(&raw),
            kebab: to_kebab_case(&raw),
            camel: to_camel_case(&raw),
            raw,
        }
    }

    /// The name exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Class and type identifier; also the component folder name.
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// URL segment, file name and CSS class prefix.
    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    /// Identifier for exported objects (e.g., the service object).
    pub fn camel(&self) -> &str {
        &self.camel
    }
}

impl std::fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
