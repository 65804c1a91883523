//! Loading query documents from files, readers, and byte buffers.
//!
//! The `must_*` variants panic instead of returning an error and are meant
//! for queries embedded at build time, where a broken file is a programming
//! error.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, YesqlError};
use crate::query::Queries;
use crate::scanner::parse;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses a UTF-8 encoded document. A leading byte order mark is ignored.
///
/// # Errors
///
/// Fails if the bytes are not valid UTF-8 or the document is malformed.
pub fn parse_bytes(bytes: &[u8]) -> Result<Queries> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let document = std::str::from_utf8(bytes)?;
    Ok(parse(document)?)
}

/// Reads a whole document from `reader` and parses it.
///
/// # Errors
///
/// Fails if reading fails, the input is not UTF-8, or it is malformed.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Queries> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    debug!(bytes = buffer.len(), "read query document");
    parse_bytes(&buffer)
}

/// Reads and parses the query file at `path`.
///
/// # Errors
///
/// Returns [`YesqlError::SourceUnavailable`] if the file cannot be read,
/// otherwise any error from [`parse_bytes`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Queries> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| YesqlError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let queries = parse_bytes(&bytes)?;
    info!(path = %path.display(), queries = queries.len(), "loaded query file");
    Ok(queries)
}

/// Like [`parse_file`], but panics on error.
///
/// # Panics
///
/// Panics if the file cannot be read or parsed.
#[must_use]
pub fn must_parse_file(path: impl AsRef<Path>) -> Queries {
    parse_file(path).unwrap_or_else(|e| panic!("{e}"))
}

/// Like [`parse_bytes`], but panics on error.
///
/// # Panics
///
/// Panics if the bytes cannot be parsed.
#[must_use]
pub fn must_parse_bytes(bytes: &[u8]) -> Queries {
    parse_bytes(bytes).unwrap_or_else(|e| panic!("{e}"))
}
