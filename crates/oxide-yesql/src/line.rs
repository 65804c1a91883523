//! Line classification.
//!
//! Every physical line of a query file falls into exactly one [`LineKind`].
//! Classification is stateless; grouping lines into queries is the job of
//! the [`scanner`](crate::scanner).

/// Marker that opens a comment or tag line.
pub const COMMENT_MARKER: &str = "--";

/// Reserved tag key that starts a new query block.
pub const NAME_TAG: &str = "name";

/// The category of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Empty or whitespace-only line.
    Blank,
    /// A `-- key: value` annotation.
    Tag,
    /// Any other `--` line.
    Comment,
    /// A fragment of SQL text.
    Statement,
}

impl core::fmt::Display for LineKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Blank => "blank line",
            Self::Tag => "tag",
            Self::Comment => "comment",
            Self::Statement => "statement",
        };
        f.write_str(label)
    }
}

/// A line together with its classification.
///
/// `key` is only non-empty for [`LineKind::Tag`]. `content` holds the tag
/// value, the comment text, or the trimmed statement fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// The line category.
    pub kind: LineKind,
    /// Tag key, empty for non-tag lines.
    pub key: &'a str,
    /// Trimmed payload of the line.
    pub content: &'a str,
}

impl<'a> ClassifiedLine<'a> {
    const fn new(kind: LineKind, key: &'a str, content: &'a str) -> Self {
        Self { kind, key, content }
    }

    /// Returns `true` if this line declares a new query name.
    #[must_use]
    pub fn is_name(&self) -> bool {
        self.kind == LineKind::Tag && self.key == NAME_TAG
    }
}

/// Classifies a single line (without its trailing newline).
///
/// Never fails: anything that is not blank and does not start with `--` is
/// a statement fragment, and a `--` line without a `key:` prefix is a plain
/// comment. Only the first colon separates key from value, so values may
/// contain colons themselves.
#[must_use]
pub fn classify_line(line: &str) -> ClassifiedLine<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ClassifiedLine::new(LineKind::Blank, "", "");
    }

    let Some(rest) = trimmed.strip_prefix(COMMENT_MARKER) else {
        return ClassifiedLine::new(LineKind::Statement, "", trimmed);
    };

    let rest = rest.trim();
    match rest.split_once(':') {
        Some((key, value)) if !key.trim().is_empty() => {
            ClassifiedLine::new(LineKind::Tag, key.trim(), value.trim())
        }
        _ => ClassifiedLine::new(LineKind::Comment, "", rest),
    }
}
