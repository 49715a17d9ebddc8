use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::traits::DatabaseDriver;
use crate::types::{Fetched, RawQueryResult, Record, Row, SqlValue};

/// Output-mode selector for [`QueryExecutor::query_get_with_options`].
///
/// Evaluated first-match-wins: `count` beats `list`; with neither set the
/// default collapse applies and a lone row comes back as a [`Record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub count: bool,
    pub list: bool,
}

impl QueryOptions {
    /// Request the number of matching rows instead of row data.
    pub fn count() -> Self {
        Self {
            count: true,
            list: false,
        }
    }

    /// Request a sequence of rows regardless of how many match.
    pub fn list() -> Self {
        Self {
            count: false,
            list: true,
        }
    }
}

/// Executes parameterized statements against the shared connection and
/// reshapes results per the caller's requested mode.
///
/// Each operation is a single prepare, bind, execute, shape pipeline; no
/// state is retained between calls and no statement is reused. Every
/// parameter is bound as text regardless of its origin type.
pub struct QueryExecutor {
    driver: Arc<dyn DatabaseDriver>,
}

impl QueryExecutor {
    pub(crate) fn new(driver: Arc<dyn DatabaseDriver>) -> Self {
        Self { driver }
    }

    /// Run a mutating statement (insert/update/delete).
    ///
    /// Returns `Ok(true)` iff at least one row was affected; a successful
    /// statement touching zero rows is `Ok(false)`. A malformed template is
    /// an explicit [`PrepareFailed`](crate::SecureDbError::PrepareFailed)
    /// error, never a silent `false`.
    pub async fn query_set(&self, query: &str, params: &[SqlValue]) -> Result<bool> {
        let affected = self.driver.execute(query, &text_params(params)).await?;
        debug!(affected, "query_set");
        Ok(affected > 0)
    }

    /// Run a read statement with auto-collapse shaping.
    ///
    /// Zero rows is [`Fetched::Empty`], exactly one row collapses to
    /// [`Fetched::One`], and two or more rows come back as [`Fetched::Many`]
    /// in driver order.
    pub async fn query_get(&self, query: &str, params: &[SqlValue]) -> Result<Fetched> {
        let raw = self.driver.fetch(query, &text_params(params)).await?;
        debug!(rows = raw.rows.len(), "query_get");
        Ok(collapse(raw, false))
    }

    /// Run a read statement with an explicit output mode.
    ///
    /// `count` returns [`Fetched::Count`]; `list` always returns
    /// [`Fetched::Many`], even for zero or one rows. With neither set, the
    /// collapse of [`query_get`](Self::query_get) applies except that a lone
    /// row is returned as [`Fetched::Record`] rather than a plain mapping.
    pub async fn query_get_with_options(
        &self,
        query: &str,
        params: &[SqlValue],
        options: QueryOptions,
    ) -> Result<Fetched> {
        let raw = self.driver.fetch(query, &text_params(params)).await?;
        debug!(rows = raw.rows.len(), ?options, "query_get_with_options");

        if options.count {
            return Ok(Fetched::Count(raw.rows.len() as u64));
        }
        if options.list {
            return Ok(Fetched::Many(into_rows(raw)));
        }
        Ok(collapse(raw, true))
    }
}

/// Normalize parameters to their text rendering before binding.
fn text_params(params: &[SqlValue]) -> Vec<SqlValue> {
    params
        .iter()
        .map(|p| match p.as_text() {
            Some(text) => SqlValue::Text(text),
            None => SqlValue::Null,
        })
        .collect()
}

fn collapse(raw: RawQueryResult, as_record: bool) -> Fetched {
    let RawQueryResult { columns, mut rows } = raw;
    match rows.len() {
        0 => Fetched::Empty,
        1 => {
            let values = rows.remove(0);
            if as_record {
                Fetched::Record(Record::new(&columns, values))
            } else {
                Fetched::One(Row::new(&columns, values))
            }
        }
        _ => Fetched::Many(
            rows.into_iter()
                .map(|values| Row::new(&columns, values))
                .collect(),
        ),
    }
}

fn into_rows(raw: RawQueryResult) -> Vec<Row> {
    let RawQueryResult { columns, rows } = raw;
    rows.into_iter()
        .map(|values| Row::new(&columns, values))
        .collect()
}
