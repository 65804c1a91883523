//! # oxide-yesql-sqlx
//!
//! Prepares queries parsed by `oxide-yesql` against a SQLite [`SqlitePool`].
//!
//! ```rust,ignore
//! use oxide_yesql_sqlx::PreparedStatements;
//!
//! let queries = oxide_yesql::parse_file("queries.sql")?;
//! let statements = PreparedStatements::prepare_all(&pool, &queries).await?;
//!
//! let row = statements
//!     .get("get-user")?
//!     .query()
//!     .bind(42_i64)
//!     .fetch_one(&pool)
//!     .await?;
//! ```

mod error;

use std::collections::BTreeMap;

use oxide_yesql::{FromQueries, Queries, YesqlError};
use sqlx::sqlite::{SqlitePool, SqliteStatement};
use sqlx::{Executor, Statement};
use tracing::{debug, info};

pub use error::{PrepareError, Result};

/// Prepares the query registered under `name`.
///
/// # Errors
///
/// Fails with [`YesqlError::QueryNotFound`] if `name` is unknown, or with
/// [`PrepareError::Prepare`] if the database rejects the statement.
pub async fn prepare(
    pool: &SqlitePool,
    queries: &Queries,
    name: &str,
) -> Result<SqliteStatement<'static>> {
    let query = queries.require(name)?;
    debug!(query = name, sql = %query.text(), "Preparing query");
    let statement = pool
        .prepare(query.text())
        .await
        .map_err(|source| PrepareError::Prepare {
            name: name.to_string(),
            source,
        })?;
    Ok(Statement::to_owned(&statement))
}

/// A set of prepared statements keyed by query name.
#[derive(Debug, Default)]
pub struct PreparedStatements {
    statements: BTreeMap<String, SqliteStatement<'static>>,
}

impl PreparedStatements {
    /// Prepares every query in `queries`.
    ///
    /// # Errors
    ///
    /// Fails on the first statement the database rejects.
    pub async fn prepare_all(pool: &SqlitePool, queries: &Queries) -> Result<Self> {
        let mut statements = BTreeMap::new();
        for name in queries.names() {
            let statement = prepare(pool, queries, name).await?;
            statements.insert(name.to_string(), statement);
        }
        info!(count = statements.len(), "Prepared queries");
        Ok(Self { statements })
    }

    /// Prepares only the queries `T` binds.
    ///
    /// # Errors
    ///
    /// Fails if any name in `T::QUERY_NAMES` is missing from `queries`, or
    /// on the first statement the database rejects.
    pub async fn prepare_for<T: FromQueries>(pool: &SqlitePool, queries: &Queries) -> Result<Self> {
        let mut statements = BTreeMap::new();
        for name in T::QUERY_NAMES {
            let statement = prepare(pool, queries, name).await?;
            statements.insert((*name).to_string(), statement);
        }
        info!(count = statements.len(), "Prepared queries");
        Ok(Self { statements })
    }

    /// Returns the statement prepared for `name`.
    ///
    /// # Errors
    ///
    /// Fails with [`YesqlError::QueryNotFound`] if `name` was not prepared.
    pub fn get(&self, name: &str) -> Result<&SqliteStatement<'static>> {
        self.statements
            .get(name)
            .ok_or_else(|| YesqlError::QueryNotFound(name.to_string()).into())
    }

    /// Number of prepared statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if nothing was prepared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterates over the prepared query names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.statements.keys().map(String::as_str)
    }
}
