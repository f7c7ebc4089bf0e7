//! Condition tree.
//!
//! A search predicate is a tree of `Condition` nodes:
//!
//! - `AtomaryCondition`: a leaf comparing one column against a value
//! - `CompoundCondition`: an AND/OR/NOT node over zero or more children
//!
//! Leaves are only produced by `ConditionBuilder` (or decoded from the wire),
//! so a leaf's value shape always matches its type once constructed. Compound
//! nodes are built with the `and`, `or` and `not` combinators, which accept
//! any number of children, including none.
//!
//! # Example
//!
//! ```rust
//! use w3query::{and, or, ConditionBuilder, Operator};
//!
//! let int = ConditionBuilder::int();
//! let tree = or(vec![
//!     int.build("grade", Operator::Eq, 66).unwrap().into(),
//!     int.build("age", Operator::Ge, 20).unwrap().into(),
//! ]);
//! assert_eq!(tree.children().len(), 2);
//!
//! // match-everything predicate
//! assert!(and(vec![]).children().is_empty());
//! ```

use super::types::{ConditionType, Direction, Logic, Operator};
use super::value::Value;
use serde::{Deserialize, Serialize};

/// A leaf predicate on a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomaryCondition {
    #[serde(rename = "Col")]
    col: String,

    #[serde(rename = "Type")]
    type_: ConditionType,

    #[serde(rename = "Val")]
    val: Value,

    #[serde(rename = "Op")]
    op: Operator,
}

impl AtomaryCondition {
    pub(crate) fn new(col: String, type_: ConditionType, val: Value, op: Operator) -> Self {
        Self {
            col,
            type_,
            val,
            op,
        }
    }

    pub fn col(&self) -> &str {
        &self.col
    }

    pub fn condition_type(&self) -> ConditionType {
        self.type_
    }

    pub fn val(&self) -> &Value {
        &self.val
    }

    pub fn op(&self) -> Operator {
        self.op
    }
}

/// A logical combination of child conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompoundCondition {
    #[serde(rename = "Op")]
    logic: Logic,

    #[serde(rename = "Query")]
    children: Vec<Condition>,
}

impl CompoundCondition {
    pub fn new(logic: Logic, children: Vec<Condition>) -> Self {
        Self { logic, children }
    }

    pub fn logic(&self) -> Logic {
        self.logic
    }

    pub fn children(&self) -> &[Condition] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Condition> {
        self.children
    }
}

/// A node of the predicate tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    Atomary(AtomaryCondition),
    Compound(CompoundCondition),
}

impl Condition {
    pub fn is_atomary(&self) -> bool {
        matches!(self, Condition::Atomary(_))
    }

    pub fn as_atomary(&self) -> Option<&AtomaryCondition> {
        match self {
            Condition::Atomary(c) => Some(c),
            Condition::Compound(_) => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundCondition> {
        match self {
            Condition::Compound(c) => Some(c),
            Condition::Atomary(_) => None,
        }
    }

    /// Number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Condition::Atomary(_) => 1,
            Condition::Compound(c) => c.children.iter().map(Condition::leaf_count).sum(),
        }
    }

    /// Pretty print the condition tree
    pub fn pretty_print(&self, indent: usize) -> String {
        let indent_str = "  ".repeat(indent);
        match self {
            Condition::Atomary(c) => format!(
                "{}{} {} {} ({})",
                indent_str, c.col, c.op, c.val, c.type_
            ),
            Condition::Compound(c) => {
                let logic = match c.logic {
                    Logic::And => "AND",
                    Logic::Or => "OR",
                    Logic::Not => "NOT",
                };
                let mut result = format!("{}{}(", indent_str, logic);
                if !c.children.is_empty() {
                    result.push('\n');
                    for (i, child) in c.children.iter().enumerate() {
                        result.push_str(&child.pretty_print(indent + 1));
                        if i < c.children.len() - 1 {
                            result.push(',');
                        }
                        result.push('\n');
                    }
                    result.push_str(&indent_str);
                }
                result.push(')');
                result
            }
        }
    }
}

impl From<AtomaryCondition> for Condition {
    fn from(c: AtomaryCondition) -> Self {
        Condition::Atomary(c)
    }
}

impl From<CompoundCondition> for Condition {
    fn from(c: CompoundCondition) -> Self {
        Condition::Compound(c)
    }
}

// === Combinators ===

/// All children must hold. `and(vec![])` matches every record.
pub fn and(conditions: Vec<Condition>) -> CompoundCondition {
    CompoundCondition::new(Logic::And, conditions)
}

pub fn or(conditions: Vec<Condition>) -> CompoundCondition {
    CompoundCondition::new(Logic::Or, conditions)
}

/// Negation of the conjunction of the children. Any number of children is
/// accepted.
pub fn not(conditions: Vec<Condition>) -> CompoundCondition {
    CompoundCondition::new(Logic::Not, conditions)
}

/// One ordering key of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortSpec {
    #[serde(rename = "Col")]
    pub col: String,

    #[serde(rename = "Dir")]
    pub dir: Direction,
}

pub fn asc<S: Into<String>>(col: S) -> SortSpec {
    SortSpec {
        col: col.into(),
        dir: Direction::Asc,
    }
}

pub fn desc<S: Into<String>>(col: S) -> SortSpec {
    SortSpec {
        col: col.into(),
        dir: Direction::Desc,
    }
}
