//! Block assembly.
//!
//! The [`Scanner`] folds classified lines into [`Queries`]. It owns the
//! result map for the whole parse and keeps the block currently being
//! filled as an owned cursor, committing it when the next `name` tag
//! arrives or the input ends.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::line::{ClassifiedLine, LineKind, classify_line};
use crate::query::{Queries, Query};

/// The query block under construction.
#[derive(Debug)]
struct OpenBlock {
    name: String,
    line: usize,
    query: Query,
    fragments: usize,
}

/// Stateful assembler turning lines into named queries.
///
/// ```rust
/// use oxide_yesql::Scanner;
///
/// let mut scanner = Scanner::new();
/// for line in ["-- name: one", "SELECT 1"] {
///     scanner.feed(line).unwrap();
/// }
/// let queries = scanner.finish();
/// assert_eq!(queries.get("one").unwrap().text(), "SELECT 1");
/// ```
#[derive(Debug, Default)]
pub struct Scanner {
    queries: Queries,
    declared: HashMap<String, usize>,
    current: Option<OpenBlock>,
    line: usize,
}

impl Scanner {
    /// Creates an empty scanner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines fed so far.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Classifies and consumes the next physical line.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the line breaks the document structure.
    /// The scanner should be discarded after an error.
    pub fn feed(&mut self, line: &str) -> Result<(), ParseError> {
        self.line += 1;
        let classified = classify_line(line);
        trace!(line = self.line, kind = ?classified.kind, "classified line");
        self.apply(classified)
    }

    fn apply(&mut self, line: ClassifiedLine<'_>) -> Result<(), ParseError> {
        match line.kind {
            LineKind::Blank | LineKind::Comment => Ok(()),
            LineKind::Tag if line.is_name() => self.open(line.content),
            LineKind::Tag => {
                let block = self.current_block(LineKind::Tag)?;
                block
                    .query
                    .tags
                    .insert(line.key.to_string(), line.content.to_string());
                Ok(())
            }
            LineKind::Statement => {
                let block = self.current_block(LineKind::Statement)?;
                block.query.push_fragment(line.content);
                block.fragments += 1;
                Ok(())
            }
        }
    }

    fn open(&mut self, name: &str) -> Result<(), ParseError> {
        if let Some(&first_line) = self.declared.get(name) {
            return Err(ParseError::DuplicateName {
                name: name.to_string(),
                line: self.line,
                first_line,
            });
        }

        self.commit();
        self.declared.insert(name.to_string(), self.line);
        self.current = Some(OpenBlock {
            name: name.to_string(),
            line: self.line,
            query: Query::default(),
            fragments: 0,
        });
        Ok(())
    }

    fn current_block(&mut self, kind: LineKind) -> Result<&mut OpenBlock, ParseError> {
        let line = self.line;
        self.current
            .as_mut()
            .ok_or(ParseError::MissingName { line, kind })
    }

    fn commit(&mut self) {
        if let Some(block) = self.current.take() {
            debug!(
                name = %block.name,
                line = block.line,
                fragments = block.fragments,
                tags = block.query.tags.len(),
                "assembled query"
            );
            self.queries.insert(block.name, block.query);
        }
    }

    /// Closes the open block and returns every assembled query.
    #[must_use]
    pub fn finish(mut self) -> Queries {
        self.commit();
        self.queries
    }
}

/// Parses a query document into named queries.
///
/// Lines may end in `\n` or `\r\n` and a leading byte order mark is
/// ignored. An empty document yields an empty map.
///
/// # Errors
///
/// Fails on the first duplicate `name`, or on a statement or tag that
/// appears before any `name` declaration.
pub fn parse(document: &str) -> Result<Queries, ParseError> {
    let document = document.strip_prefix('\u{FEFF}').unwrap_or(document);
    let mut scanner = Scanner::new();
    for line in document.lines() {
        scanner.feed(line)?;
    }
    Ok(scanner.finish())
}
