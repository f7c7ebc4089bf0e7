//! Read queries: a condition tree plus pagination and ordering.
//!
//! Optional parts are *omitted* from the wire form when unset; the engine
//! treats a missing `Offset`, `Limit` or `Sort` as "unspecified", which a
//! `null` or `0` would not express.

use super::Params;
use crate::condition::{and, Condition, SortSpec};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Query {
    #[serde(rename = "Search")]
    pub search: Condition,

    #[serde(rename = "Offset", default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    #[serde(rename = "Limit", default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Ordering keys, primary first
    #[serde(rename = "Sort", default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortSpec>,

    #[serde(rename = "Params", default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl Query {
    /// A query with only a search condition
    pub fn new<C: Into<Condition>>(search: C) -> Self {
        Self {
            search: search.into(),
            offset: None,
            limit: None,
            sort: Vec::new(),
            params: None,
        }
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Append a sort key after the existing ones
    pub fn with_sort(mut self, spec: SortSpec) -> Self {
        self.sort.push(spec);
        self
    }

    /// Attach caller parameters, forwarded to the engine untouched
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// True when the search is an empty AND
    pub fn is_match_all(&self) -> bool {
        self.search == Condition::from(and(vec![]))
    }
}

/// The canonical "no filter" query: `{"Search":{"Op":"AND","Query":[]}}`.
pub fn match_all() -> Query {
    Query::new(and(vec![]))
}

/// Assemble a search query.
///
/// `offset` and `limit` are set only when given; `sort` is kept in the given
/// order and an empty list means no sort.
///
/// # Example
///
/// ```rust
/// use w3query::{asc, search, ConditionBuilder, Operator};
///
/// let cond = ConditionBuilder::int().build("age", Operator::Ge, 20)?;
/// let query = search(cond, None, Some(10), vec![asc("age")]);
/// assert_eq!(query.limit, Some(10));
/// assert!(query.offset.is_none());
/// # Ok::<(), w3query::error::Error>(())
/// ```
pub fn search<C: Into<Condition>>(
    cond: C,
    offset: Option<u64>,
    limit: Option<u64>,
    sort: Vec<SortSpec>,
) -> Query {
    let mut query = Query::new(cond);
    query.offset = offset;
    query.limit = limit;
    query.sort = sort;

    trace!(
        offset = ?query.offset,
        limit = ?query.limit,
        sort_keys = query.sort.len(),
        leaves = query.search.leaf_count(),
        "Assembled search query"
    );
    query
}
