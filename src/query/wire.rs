//! Wire serializer.
//!
//! Encodes conditions, queries and mutation payloads into the JSON the
//! query engine consumes, and decodes them back.
//!
//! # Wire Format
//!
//! Key names are case-sensitive and fixed:
//!
//! ```json
//! {
//!   "Search": {"Op": "OR", "Query": [
//!     {"Col": "grade", "Type": "int", "Val": 66, "Op": "=="},
//!     {"Col": "age", "Type": "int", "Val": 20, "Op": ">="}
//!   ]},
//!   "Offset": 0,
//!   "Limit": 10,
//!   "Sort": [{"Col": "age", "Dir": "ASC"}],
//!   "Params": {}
//! }
//! ```
//!
//! Write payloads use `Insert`/`Update` (`{"Cols": [...], "Values": [[...]]}`)
//! and `Delete` (`[key, ...]`) instead of `Search`.

use super::{DeleteQuery, InsertQuery, Payload, Query, UpdateQuery};
use crate::condition::{AtomaryCondition, CompoundCondition, Condition};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

mod sealed {
    pub trait Sealed {}
}

/// Values that have a wire representation.
pub trait WireFormat: Serialize + DeserializeOwned + sealed::Sealed {}

macro_rules! wire_format {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl WireFormat for $t {}
        )*
    };
}

wire_format!(
    Query,
    Condition,
    AtomaryCondition,
    CompoundCondition,
    InsertQuery,
    UpdateQuery,
    DeleteQuery,
    Payload
);

/// Encode to compact JSON text
pub fn encode<T: WireFormat>(value: &T) -> Result<String> {
    let text = serde_json::to_string(value)?;
    trace!(bytes = text.len(), "Encoded wire payload");
    Ok(text)
}

/// Encode to indented JSON text
pub fn encode_pretty<T: WireFormat>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Encode to a JSON value
pub fn to_value<T: WireFormat>(value: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

/// Decode from JSON text.
///
/// Only the structure is checked; use `Condition::validate` to re-apply the
/// builder rules to decoded leaves.
pub fn decode<T: WireFormat>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| Error::Serialization(format!("invalid payload: {}", e)))
}

/// Decode any top-level request
pub fn decode_payload(text: &str) -> Result<Payload> {
    decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{asc, or, ConditionBuilder, Operator};
    use crate::query::search;

    #[test]
    fn test_condition_key_order() {
        let cond = ConditionBuilder::number()
            .build("grade", Operator::Eq, 66)
            .unwrap();
        assert_eq!(
            encode(&cond).unwrap(),
            r#"{"Col":"grade","Type":"number","Val":66,"Op":"=="}"#
        );
    }

    #[test]
    fn test_query_encoding() {
        let int = ConditionBuilder::int();
        let query = search(
            or(vec![
                int.build("grade", Operator::Eq, 66).unwrap().into(),
                int.build("age", Operator::Ge, 20).unwrap().into(),
            ]),
            None,
            None,
            vec![asc("age")],
        );
        assert_eq!(
            encode(&query).unwrap(),
            concat!(
                r#"{"Search":{"Op":"OR","Query":["#,
                r#"{"Col":"grade","Type":"int","Val":66,"Op":"=="},"#,
                r#"{"Col":"age","Type":"int","Val":20,"Op":">="}]},"#,
                r#""Sort":[{"Col":"age","Dir":"ASC"}]}"#
            )
        );
    }

    #[test]
    fn test_decode_error_is_serialization() {
        let err = decode::<Query>(r#"{"Limit": 5}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().contains("invalid payload"));
    }

    #[test]
    fn test_decode_payload_kinds() {
        assert_eq!(
            decode_payload(r#"{"Delete": [1, "a"]}"#).unwrap().kind(),
            "delete"
        );
        assert_eq!(
            decode_payload(r#"{"Insert": {"Cols": ["a"], "Values": [[1]]}}"#)
                .unwrap()
                .kind(),
            "insert"
        );
        let payload = decode_payload(r#"{"Search": {"Op": "AND", "Query": []}, "Limit": 3}"#).unwrap();
        assert_eq!(payload.kind(), "search");
        assert!(payload.condition().is_some());
    }

    #[test]
    fn test_lower_case_direction_normalized() {
        let query: Query =
            decode(r#"{"Search": {"Op": "AND", "Query": []}, "Sort": [{"Col": "age", "Dir": "desc"}]}"#)
                .unwrap();
        assert!(encode(&query).unwrap().contains(r#""Dir":"DESC""#));
    }
}
