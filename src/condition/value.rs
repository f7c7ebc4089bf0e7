//! Condition values.
//!
//! A `Value` is what an atomary condition compares a column against: either
//! a single `Scalar` or an ordered list of scalars (for `list` fields).
//! Values are JSON-compatible and encode with their natural JSON
//! representation; integers stay integers on the wire.
//!
//! # Supported Types
//!
//! - **Boolean**: true or false
//! - **Number**: integer or finite floating point
//! - **String**: UTF-8 text, also used for dates and datetimes
//!
//! # Example
//!
//! ```rust
//! use w3query::{Scalar, Value};
//!
//! let grade = Value::from(66);
//! let tags = Value::from(vec!["a", "b"]);
//! assert_eq!(grade.kind(), "number");
//! assert_eq!(tags.kind(), "array");
//! assert_eq!(tags.as_list().map(|l| l.len()), Some(2));
//! assert_eq!(Scalar::from("x").as_str(), Some("x"));
//! ```

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Wire format of `date` values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format of `datetime` values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Boolean(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Kind name used in validation errors
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Boolean(_) => "boolean",
            Scalar::Number(_) => "number",
            Scalar::String(_) => "string",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Scalar::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Right-hand side of an atomary condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl Value {
    /// Kind name used in validation errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(s) => s.kind(),
            Value::List(_) => "array",
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::String(_)))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Number(_)))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Value::List(items) => Some(items),
            Value::Scalar(_) => None,
        }
    }

    /// A `date` value in the engine's `YYYY-MM-DD` form.
    pub fn date(date: NaiveDate) -> Self {
        Value::Scalar(Scalar::String(date.format(DATE_FORMAT).to_string()))
    }

    /// A `datetime` value in the engine's `YYYY-MM-DD HH:MM:SS` form.
    pub fn datetime(datetime: NaiveDateTime) -> Self {
        Value::Scalar(Scalar::String(datetime.format(DATETIME_FORMAT).to_string()))
    }
}

// Conversions
impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(Number::from(n))
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(Number::from(n))
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Number(Number::from(n))
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(Number::from(n))
    }
}

impl TryFrom<f64> for Scalar {
    type Error = Error;

    fn try_from(n: f64) -> Result<Self> {
        Number::from_f64(n)
            .map(Scalar::Number)
            .ok_or_else(|| Error::InvalidArgument(format!("{} is not a finite number", n)))
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<Scalar>> for Value {
    fn from(items: Vec<Scalar>) -> Self {
        Value::List(items)
    }
}

macro_rules! value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }

            impl From<Vec<$t>> for Value {
                fn from(items: Vec<$t>) -> Self {
                    Value::List(items.into_iter().map(Scalar::from).collect())
                }
            }
        )*
    };
}

value_from!(bool, i32, i64, u32, u64, String, &str);

impl TryFrom<f64> for Value {
    type Error = Error;

    fn try_from(n: f64) -> Result<Self> {
        Scalar::try_from(n).map(Value::Scalar)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Primary key of a row addressed by a delete payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Number(Number),
    String(String),
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Number(Number::from(n))
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Number(Number::from(n))
    }
}

impl From<u64> for Key {
    fn from(n: u64) -> Self {
        Key::Number(Number::from(n))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}
