//! # oxide-yesql
//!
//! Named SQL queries embedded in plain `.sql` files.
//!
//! A query file holds any number of statements, each introduced by a
//! `-- name:` comment. Other `-- key: value` comments inside a block become
//! tags on that query, plain comments are ignored, and multi-line
//! statements are joined into a single line.
//!
//! ```sql
//! -- name: get-user
//! -- raw: 1
//! SELECT *
//! FROM users
//! WHERE id = ?;
//! ```
//!
//! ## Parsing
//!
//! ```rust
//! let queries = oxide_yesql::parse(
//!     "-- name: get-user\n-- raw: 1\nSELECT *\nFROM users\nWHERE id = ?;",
//! )
//! .unwrap();
//!
//! let query = queries.get("get-user").unwrap();
//! assert_eq!(query.text(), "SELECT * FROM users WHERE id = ?;");
//! assert_eq!(query.tag("raw"), Some("1"));
//! ```
//!
//! Parsing is all-or-nothing: a statement or tag before the first
//! `-- name:`, or a name declared twice, fails the whole document with a
//! [`ParseError`] carrying the offending line.
//!
//! ## Binding
//!
//! [`Binder`] and the [`FromQueries`] trait (derivable with
//! `oxide-yesql-derive`) map query names onto typed destinations.

pub mod bind;
pub mod error;
pub mod line;
pub mod loader;
pub mod query;
pub mod scanner;

pub use bind::{Binder, FromQueries, FromQuery};
pub use error::{ParseError, Result, YesqlError};
pub use line::{ClassifiedLine, LineKind, classify_line};
pub use loader::{must_parse_bytes, must_parse_file, parse_bytes, parse_file, parse_reader};
pub use query::{Queries, Query};
pub use scanner::{Scanner, parse};
