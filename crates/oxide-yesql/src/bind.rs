//! Binding parsed queries to typed destinations.
//!
//! There are two ways to pull queries out of a [`Queries`] map by name:
//!
//! - [`Binder`] registers destinations one at a time at runtime.
//! - `#[derive(FromQueries)]` from `oxide-yesql-derive` generates a
//!   [`FromQueries`] impl for a struct whose fields carry `#[query("name")]`.
//!
//! Both fail with [`YesqlError::QueryNotFound`] when a name is missing.

use std::sync::Arc;

use tracing::trace;

use crate::error::{Result, YesqlError};
use crate::query::{Queries, Query};

/// A value that can be built from one named query.
pub trait FromQuery: Sized {
    /// Builds the value from the query registered under `name`.
    ///
    /// # Errors
    ///
    /// Implementations may reject queries they cannot represent.
    fn from_query(name: &str, query: &Query) -> Result<Self>;
}

impl FromQuery for String {
    fn from_query(_name: &str, query: &Query) -> Result<Self> {
        Ok(query.text.clone())
    }
}

impl FromQuery for Arc<str> {
    fn from_query(_name: &str, query: &Query) -> Result<Self> {
        Ok(Arc::from(query.text.as_str()))
    }
}

impl FromQuery for Box<str> {
    fn from_query(_name: &str, query: &Query) -> Result<Self> {
        Ok(query.text.clone().into_boxed_str())
    }
}

impl FromQuery for Query {
    fn from_query(_name: &str, query: &Query) -> Result<Self> {
        Ok(query.clone())
    }
}

/// A type assembled from several named queries.
///
/// Usually derived with `#[derive(FromQueries)]`.
pub trait FromQueries: Sized {
    /// Every query name the type looks up.
    const QUERY_NAMES: &'static [&'static str];

    /// Builds the value from a parsed query map.
    ///
    /// # Errors
    ///
    /// Fails with [`YesqlError::QueryNotFound`] if any name in
    /// [`Self::QUERY_NAMES`] is absent.
    fn from_queries(queries: &Queries) -> Result<Self>;

    /// Returns the names in [`Self::QUERY_NAMES`] missing from `queries`.
    #[must_use]
    fn missing_names(queries: &Queries) -> Vec<&'static str> {
        Self::QUERY_NAMES
            .iter()
            .copied()
            .filter(|name| !queries.contains(name))
            .collect()
    }
}

/// Runtime registration of query destinations.
///
/// ```rust
/// use oxide_yesql::{Binder, parse};
///
/// let queries = parse("-- name: get-user\nSELECT * FROM users WHERE id = ?").unwrap();
///
/// let mut get_user = String::new();
/// Binder::new(&queries).bind("get-user", &mut get_user).unwrap();
/// assert_eq!(get_user, "SELECT * FROM users WHERE id = ?");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binder<'q> {
    queries: &'q Queries,
}

impl<'q> Binder<'q> {
    /// Creates a binder over a parsed query map.
    #[must_use]
    pub const fn new(queries: &'q Queries) -> Self {
        Self { queries }
    }

    /// Looks up `name` and converts it into `T`.
    ///
    /// # Errors
    ///
    /// Fails if the name is absent or the conversion fails.
    pub fn get<T: FromQuery>(&self, name: &str) -> Result<T> {
        let query = self
            .queries
            .get(name)
            .ok_or_else(|| YesqlError::QueryNotFound(name.to_string()))?;
        trace!(query = name, "binding query");
        T::from_query(name, query)
    }

    /// Looks up `name` and stores it into `dest`.
    ///
    /// `dest` is left untouched on error.
    ///
    /// # Errors
    ///
    /// Fails if the name is absent or the conversion fails.
    pub fn bind<T: FromQuery>(&self, name: &str, dest: &mut T) -> Result<&Self> {
        *dest = self.get(name)?;
        Ok(self)
    }
}
