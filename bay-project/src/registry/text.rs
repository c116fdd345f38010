//! Line and insertion helpers shared by the registry parsers.

/// One line of a document, located by byte offsets.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    /// Offset of the first byte of the line.
    pub start: usize,
    /// Offset just past the line terminator (or end of input).
    pub end: usize,
    /// Line content without the terminator.
    pub text: &'a str,
    /// Whether the line ends with `\n`.
    pub terminated: bool,
}

impl Line<'_> {
    /// Leading whitespace of the line.
    pub fn indent(&self) -> &str {
        let trimmed = self.text.trim_start();
        &self.text[..self.text.len() - trimmed.len()]
    }
}

/// Split `content` into lines, keeping offsets.
pub(crate) fn lines(content: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;

    for raw in content.split_inclusive('\n') {
        let end = start + raw.len();
        let terminated = raw.ends_with('\n');
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        lines.push(Line {
            start,
            end,
            text,
            terminated,
        });
        start = end;
    }

    lines
}

/// Index of the line containing byte `offset`.
pub(crate) fn line_at(lines: &[Line<'_>], offset: usize) -> Option<usize> {
    lines
        .iter()
        .position(|line| offset >= line.start && offset < line.end)
}

/// The line terminator used by `content`.
pub(crate) fn line_ending(content: &str) -> &'static str {
    if content.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Text inserted at a byte offset of the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Insertion {
    pub offset: usize,
    pub text: String,
}

impl Insertion {
    /// Insert `new_line` as its own line directly after `line`.
    pub fn after_line(line: &Line<'_>, new_line: &str, eol: &str) -> Self {
        let text = if line.terminated {
            format!("{new_line}{eol}")
        } else {
            format!("{eol}{new_line}")
        };
        Self {
            offset: line.end,
            text,
        }
    }
}

/// Apply insertions computed against `content`.
///
/// Offsets refer to the original text; insertions are applied back to front
/// so earlier offsets stay valid.
pub(crate) fn apply(content: &str, mut insertions: Vec<Insertion>) -> String {
    insertions.sort_by(|a, b| b.offset.cmp(&a.offset));
    let extra: usize = insertions.iter().map(|i| i.text.len()).sum();
    let mut out = String::with_capacity(content.len() + extra);
    out.push_str(content);
    for insertion in insertions {
        out.insert_str(insertion.offset, &insertion.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_offsets() {
        let content = "a\r\nbb\nccc";
        let lines = lines(content);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "a");
        assert_eq!((lines[0].start, lines[0].end), (0, 3));
        assert_eq!(lines[1].text, "bb");
        assert!(lines[1].terminated);
        assert_eq!(lines[2].text, "ccc");
        assert!(!lines[2].terminated);
        assert_eq!(lines[2].end, content.len());
    }

    #[test]
    fn test_line_at() {
        let content = "one\ntwo\n";
        let lines = lines(content);
        assert_eq!(line_at(&lines, 0), Some(0));
        assert_eq!(line_at(&lines, 3), Some(0));
        assert_eq!(line_at(&lines, 4), Some(1));
        assert_eq!(line_at(&lines, 8), None);
    }

    #[test]
    fn test_indent() {
        let lines = lines("    new NotFound()\n");
        assert_eq!(lines[0].indent(), "    ");
    }

    #[test]
    fn test_insert_after_unterminated_last_line() {
        let content = "first\nlast";
        let lines = lines(content);
        let insertion = Insertion::after_line(&lines[1], "added", "\n");
        assert_eq!(apply(content, vec![insertion]), "first\nlast\nadded");
    }

    #[test]
    fn test_apply_multiple_uses_original_offsets() {
        let content = "a\nb\nc\n";
        let lines = lines(content);
        let insertions = vec![
            Insertion::after_line(&lines[0], "x", "\n"),
            Insertion {
                offset: lines[2].start,
                text: "y\n".to_string(),
            },
        ];
        assert_eq!(apply(content, insertions), "a\nx\nb\ny\nc\n");
    }

    #[test]
    fn test_line_ending() {
        assert_eq!(line_ending("a\r\nb"), "\r\n");
        assert_eq!(line_ending("a\nb"), "\n");
        assert_eq!(line_ending(""), "\n");
    }
}
