//! Field types, operators and their wire names.
//!
//! Every enum here is closed and carries the exact string the query engine
//! matches on. Classification of field types into families is a total match,
//! so adding a `TypeName` forces every family decision to be revisited.
//!
//! # Families
//!
//! - **Numeric**: `number`, `int`, `float`
//! - **Temporal**: `date`, `datetime`
//! - **Textual**: `text`, `textis`, `string`
//! - `list` belongs to no family
//!
//! # Example
//!
//! ```rust
//! use w3query::{Family, TypeName};
//!
//! assert_eq!(TypeName::Int.family(), Some(Family::Numeric));
//! assert_eq!(TypeName::List.family(), None);
//! assert_eq!(TypeName::from_name("datetime"), Some(TypeName::Datetime));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declared type of a queried column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Text,
    Textis,
    List,
    String,
    Number,
    Int,
    Float,
    Date,
    Datetime,
}

/// Semantic family of a `TypeName`; governs value-shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Numeric,
    Temporal,
    Textual,
}

impl TypeName {
    pub const ALL: [TypeName; 9] = [
        TypeName::Text,
        TypeName::Textis,
        TypeName::List,
        TypeName::String,
        TypeName::Number,
        TypeName::Int,
        TypeName::Float,
        TypeName::Date,
        TypeName::Datetime,
    ];

    /// Family of this type, `None` for `list`.
    pub fn family(self) -> Option<Family> {
        match self {
            TypeName::Number | TypeName::Int | TypeName::Float => Some(Family::Numeric),
            TypeName::Date | TypeName::Datetime => Some(Family::Temporal),
            TypeName::Text | TypeName::Textis | TypeName::String => Some(Family::Textual),
            TypeName::List => None,
        }
    }

    /// Wire name of the type.
    pub fn name(self) -> &'static str {
        match self {
            TypeName::Text => "text",
            TypeName::Textis => "textis",
            TypeName::List => "list",
            TypeName::String => "string",
            TypeName::Number => "number",
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::Date => "date",
            TypeName::Datetime => "datetime",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        TypeName::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The `Type` tag carried by an atomary condition.
///
/// Either the declared field type, or the `numeric` pseudo-type produced
/// when a numeric field is queried with `between`. `numeric` is never a
/// valid builder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionType {
    Declared(TypeName),
    Numeric,
}

impl ConditionType {
    pub fn name(self) -> &'static str {
        match self {
            ConditionType::Declared(t) => t.name(),
            ConditionType::Numeric => "numeric",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        if name == "numeric" {
            return Some(ConditionType::Numeric);
        }
        TypeName::from_name(name).map(ConditionType::Declared)
    }
}

impl From<TypeName> for ConditionType {
    fn from(t: TypeName) -> Self {
        ConditionType::Declared(t)
    }
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ConditionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ConditionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ConditionType::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown condition type '{}'", name)))
    }
}

/// Comparison, range, membership and text-match operators.
///
/// Legality per family is checked by `ConditionBuilder`, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = ">= or 0")]
    GeOrZero,
    #[serde(rename = "or")]
    Or,
    #[serde(rename = "between")]
    Between,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not in")]
    NotIn,
    #[serde(rename = "reverse in")]
    ReverseIn,
    #[serde(rename = "starts with")]
    StartsWith,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "ends with")]
    EndsWith,
}

impl Operator {
    pub const ALL: [Operator; 15] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::GeOrZero,
        Operator::Or,
        Operator::Between,
        Operator::In,
        Operator::NotIn,
        Operator::ReverseIn,
        Operator::StartsWith,
        Operator::Contains,
        Operator::EndsWith,
    ];

    /// Wire name of the operator.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::GeOrZero => ">= or 0",
            Operator::Or => "or",
            Operator::Between => "between",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::ReverseIn => "reverse in",
            Operator::StartsWith => "starts with",
            Operator::Contains => "contains",
            Operator::EndsWith => "ends with",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical connective of a compound condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Logic {
    And,
    Or,
    Not,
}

/// Sort direction. Decoding also accepts the lower-case spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl Direction {
    /// Wire name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
