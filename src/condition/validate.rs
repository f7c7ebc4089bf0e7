//! Re-validation of condition trees that did not come from a builder.
//!
//! A tree is valid when every leaf is one a `ConditionBuilder` could have
//! produced. Built trees always pass; decoded ones may not.

use super::ast::{AtomaryCondition, Condition};
use super::builder::ConditionBuilder;
use super::types::{ConditionType, Operator, TypeName};
use crate::error::{Error, Result};

impl Condition {
    /// Check every leaf of the tree, stopping at the first invalid one.
    pub fn validate(&self) -> Result<()> {
        match self {
            Condition::Atomary(c) => c.validate(),
            Condition::Compound(c) => c.children().iter().try_for_each(Condition::validate),
        }
    }
}

impl AtomaryCondition {
    pub fn validate(&self) -> Result<()> {
        match self.condition_type() {
            ConditionType::Declared(t) => {
                let produced = ConditionBuilder::new(t).check(self.op(), self.val())?;
                if produced != self.condition_type() {
                    return Err(Error::InvalidArgument(format!(
                        "column '{}': '{}' on a {} field must carry type '{}'",
                        self.col(),
                        self.op(),
                        t,
                        produced
                    )));
                }
                Ok(())
            }
            ConditionType::Numeric => {
                if self.op() != Operator::Between {
                    return Err(Error::UnsupportedOperator {
                        type_name: ConditionType::Numeric.name().to_string(),
                        op: self.op().name().to_string(),
                    });
                }
                ConditionBuilder::new(TypeName::Number)
                    .check(self.op(), self.val())
                    .map(|_| ())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ast::{and, not, or};
    use serde_json::json;

    fn decode(json: serde_json::Value) -> Condition {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_built_tree_is_valid() {
        let tree: Condition = and(vec![
            ConditionBuilder::int()
                .build("grade", Operator::Between, 5)
                .unwrap()
                .into(),
            not(vec![or(vec![ConditionBuilder::list()
                .build("tags", Operator::In, vec!["a"])
                .unwrap()
                .into()])
            .into()])
            .into(),
        ])
        .into();
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_decoded_shape_mismatch() {
        let tree = decode(json!({"Op": "AND", "Query": [
            {"Col": "age", "Type": "int", "Val": "20", "Op": ">="}
        ]}));
        assert!(matches!(tree.validate(), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_numeric_requires_between() {
        let leaf = decode(json!({"Col": "g", "Type": "numeric", "Val": 1, "Op": "=="}));
        assert!(matches!(
            leaf.validate(),
            Err(Error::UnsupportedOperator { .. })
        ));

        let leaf = decode(json!({"Col": "g", "Type": "numeric", "Val": 1, "Op": "between"}));
        assert!(leaf.validate().is_ok());
    }

    #[test]
    fn test_declared_numeric_between_rejected() {
        let leaf = decode(json!({"Col": "g", "Type": "int", "Val": 1, "Op": "between"}));
        let err = leaf.validate().unwrap_err();
        assert!(err.to_string().contains("must carry type 'numeric'"));
    }
}
