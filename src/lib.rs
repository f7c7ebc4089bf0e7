// w3query - typed query-condition builder
// Produces the JSON query objects consumed by the w3 query engine

#![warn(rust_2018_idioms)]

pub mod condition;
pub mod config;
pub mod engine;
pub mod query;

// Re-exports for convenience
pub use condition::{
    and, asc, desc, not, or, AtomaryCondition, CompoundCondition, Condition, ConditionBuilder,
    ConditionType, Direction, Family, Key, Logic, Operator, Scalar, SortSpec, TypeName, Value,
};
pub use engine::{submit, ProcessEngine, QueryEngine};
pub use query::{
    match_all, search, wire, DeleteQuery, InsertQuery, Params, Payload, Query, Rows, UpdateQuery,
};

/// w3query error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum Error {
        #[error("[{type_name} condition] {expected} value expected, got {actual}")]
        TypeMismatch {
            type_name: String,
            expected: &'static str,
            actual: &'static str,
        },

        #[error("[{type_name} condition] operator '{op}' is not supported for this type")]
        UnsupportedOperator { type_name: String, op: String },

        #[error("Serialization error: {0}")]
        Serialization(String),

        #[error("Invalid argument: {0}")]
        InvalidArgument(String),

        #[error("Engine error: {0}")]
        Engine(String),

        #[error("Config error: {0}")]
        Config(String),
    }

    impl From<serde_json::Error> for Error {
        fn from(err: serde_json::Error) -> Self {
            Error::Serialization(err.to_string())
        }
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_messages_name_the_builder() {
        let err = error::Error::TypeMismatch {
            type_name: "int".to_string(),
            expected: "number",
            actual: "string",
        };
        assert_eq!(err.to_string(), "[int condition] number value expected, got string");

        let err = error::Error::UnsupportedOperator {
            type_name: "text".to_string(),
            op: "between".to_string(),
        };
        assert!(err.to_string().contains("'between'"));
    }
}
