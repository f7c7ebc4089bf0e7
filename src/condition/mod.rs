//! Condition layer: typed construction of search predicates.
//!
//! This module provides everything needed to describe *what to ask for*:
//!
//! - **Types** (`types.rs`): field types, their families, operators
//! - **Values** (`value.rs`): scalar and list values compared against columns
//! - **Builder** (`builder.rs`): validates `(column, operator, value)` triples
//! - **Tree** (`ast.rs`): atomary/compound conditions, `and`/`or`/`not`, sort keys
//! - **Validation** (`validate.rs`): re-checks decoded trees
//!
//! # Example
//!
//! ```rust
//! use w3query::{or, ConditionBuilder, Operator};
//!
//! let int = ConditionBuilder::int();
//! let tree = or(vec![
//!     int.build("grade", Operator::Eq, 66)?.into(),
//!     int.build("age", Operator::Ge, 20)?.into(),
//! ]);
//! # Ok::<(), w3query::error::Error>(())
//! ```

pub mod ast;
pub mod builder;
pub mod types;
pub mod validate;
pub mod value;

pub use ast::{and, asc, desc, not, or, AtomaryCondition, CompoundCondition, Condition, SortSpec};
pub use builder::ConditionBuilder;
pub use types::{ConditionType, Direction, Family, Logic, Operator, TypeName};
pub use value::{Key, Scalar, Value};
