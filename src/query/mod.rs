//! Query assembly and the wire envelope.
//!
//! - `search.rs`: read queries (`Query`, `match_all`, `search`)
//! - `mutation.rs`: insert/update/delete payloads
//! - `wire.rs`: JSON encoding and decoding of all of the above

pub mod mutation;
pub mod search;
pub mod wire;

pub use mutation::{DeleteQuery, InsertQuery, Rows, UpdateQuery};
pub use search::{match_all, search, Query};

use crate::condition::Condition;
use serde::{Deserialize, Serialize};

/// Caller parameters attached to a payload. Never interpreted here.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Any top-level request the engine accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Insert(InsertQuery),
    Update(UpdateQuery),
    Delete(DeleteQuery),
    Search(Query),
}

impl Payload {
    /// Short name of the request kind, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Insert(_) => "insert",
            Payload::Update(_) => "update",
            Payload::Delete(_) => "delete",
            Payload::Search(_) => "search",
        }
    }

    /// Search condition, for read requests
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            Payload::Search(q) => Some(&q.search),
            Payload::Insert(_) | Payload::Update(_) | Payload::Delete(_) => None,
        }
    }

    pub fn params(&self) -> Option<&Params> {
        match self {
            Payload::Insert(q) => q.params.as_ref(),
            Payload::Update(q) => q.params.as_ref(),
            Payload::Delete(q) => q.params.as_ref(),
            Payload::Search(q) => q.params.as_ref(),
        }
    }
}

impl From<Query> for Payload {
    fn from(q: Query) -> Self {
        Payload::Search(q)
    }
}

impl From<InsertQuery> for Payload {
    fn from(q: InsertQuery) -> Self {
        Payload::Insert(q)
    }
}

impl From<UpdateQuery> for Payload {
    fn from(q: UpdateQuery) -> Self {
        Payload::Update(q)
    }
}

impl From<DeleteQuery> for Payload {
    fn from(q: DeleteQuery) -> Self {
        Payload::Delete(q)
    }
}
