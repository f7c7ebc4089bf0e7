//! Write payloads.
//!
//! These share the wire envelope with searches but carry no builder logic:
//! columns, rows and keys are forwarded as given.

use super::Params;
use crate::condition::{Key, Scalar};
use serde::{Deserialize, Serialize};

/// Column names plus one value row per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rows {
    #[serde(rename = "Cols")]
    pub cols: Vec<String>,

    #[serde(rename = "Values")]
    pub values: Vec<Vec<Scalar>>,
}

impl Rows {
    pub fn new<S: Into<String>>(cols: Vec<S>, values: Vec<Vec<Scalar>>) -> Self {
        Self {
            cols: cols.into_iter().map(Into::into).collect(),
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertQuery {
    #[serde(rename = "Insert")]
    pub insert: Rows,

    #[serde(rename = "Params", default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl InsertQuery {
    pub fn new(rows: Rows) -> Self {
        Self {
            insert: rows,
            params: None,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateQuery {
    #[serde(rename = "Update")]
    pub update: Rows,

    #[serde(rename = "Params", default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl UpdateQuery {
    pub fn new(rows: Rows) -> Self {
        Self {
            update: rows,
            params: None,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteQuery {
    #[serde(rename = "Delete")]
    pub delete: Vec<Key>,

    #[serde(rename = "Params", default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl DeleteQuery {
    pub fn new(keys: Vec<Key>) -> Self {
        Self {
            delete: keys,
            params: None,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_shape() {
        let rows = Rows::new(
            vec!["name", "age"],
            vec![
                vec![Scalar::from("vanya"), Scalar::from(22)],
                vec![Scalar::from("petya"), Scalar::from(21)],
            ],
        );
        assert_eq!(
            serde_json::to_value(InsertQuery::new(rows)).unwrap(),
            json!({"Insert": {"Cols": ["name", "age"], "Values": [["vanya", 22], ["petya", 21]]}})
        );
    }

    #[test]
    fn test_update_keeps_ragged_rows() {
        // row widths are not checked against the column list
        let rows = Rows::new(vec!["id"], vec![vec![Scalar::from(1), Scalar::from(true)]]);
        let encoded = serde_json::to_value(UpdateQuery::new(rows)).unwrap();
        assert_eq!(encoded["Update"]["Values"], json!([[1, true]]));
    }

    #[test]
    fn test_delete_with_params() {
        let mut params = Params::new();
        params.insert("soft".to_string(), json!(true));
        let query = DeleteQuery::new(vec![Key::from(1), Key::from("x")]).with_params(params);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"Delete": [1, "x"], "Params": {"soft": true}})
        );
    }
}
