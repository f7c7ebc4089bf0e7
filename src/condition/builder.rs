//! Typed construction of atomary conditions.
//!
//! A `ConditionBuilder` is bound to one declared `TypeName` and checks the
//! runtime shape of each value against that type's family:
//!
//! | Family   | Expected value          |
//! |----------|-------------------------|
//! | textual  | string                  |
//! | numeric  | number                  |
//! | temporal | string                  |
//! | `list`   | array of scalars        |
//!
//! `between` is special-cased: on numeric fields the produced condition is
//! tagged with the `numeric` pseudo-type, on temporal fields the declared type
//! is kept, and any other field rejects it. No other operator/family pairing
//! is checked here.
//!
//! The builder is an immutable value: `build` never changes it, and every call
//! returns a fresh condition.

use super::ast::AtomaryCondition;
use super::types::{ConditionType, Family, Operator, TypeName};
use super::value::Value;
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Value shape required by a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    String,
    Number,
    List,
}

impl Shape {
    fn name(self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Number => "number",
            Shape::List => "array",
        }
    }

    fn matches(self, val: &Value) -> bool {
        match self {
            Shape::String => val.is_string(),
            Shape::Number => val.is_number(),
            Shape::List => matches!(val, Value::List(_)),
        }
    }
}

/// Builder of atomary conditions for one declared field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConditionBuilder {
    type_name: TypeName,
}

impl ConditionBuilder {
    pub const fn new(type_name: TypeName) -> Self {
        Self { type_name }
    }

    pub const fn text() -> Self {
        Self::new(TypeName::Text)
    }

    pub const fn textis() -> Self {
        Self::new(TypeName::Textis)
    }

    pub const fn string() -> Self {
        Self::new(TypeName::String)
    }

    pub const fn list() -> Self {
        Self::new(TypeName::List)
    }

    pub const fn number() -> Self {
        Self::new(TypeName::Number)
    }

    pub const fn int() -> Self {
        Self::new(TypeName::Int)
    }

    pub const fn float() -> Self {
        Self::new(TypeName::Float)
    }

    pub const fn date() -> Self {
        Self::new(TypeName::Date)
    }

    pub const fn datetime() -> Self {
        Self::new(TypeName::Datetime)
    }

    pub fn type_name(&self) -> TypeName {
        self.type_name
    }

    /// Build a validated condition `col op val`.
    ///
    /// # Errors
    ///
    /// * `Error::TypeMismatch` - `val` does not have the shape the field type
    ///   (and operator) requires
    /// * `Error::UnsupportedOperator` - `between` on a textual or `list` field
    ///
    /// # Example
    ///
    /// ```rust
    /// use w3query::{ConditionBuilder, ConditionType, Operator};
    ///
    /// let cond = ConditionBuilder::number().build("grade", Operator::Between, 66).unwrap();
    /// assert_eq!(cond.condition_type(), ConditionType::Numeric);
    ///
    /// assert!(ConditionBuilder::number().build("grade", Operator::Eq, "66").is_err());
    /// ```
    pub fn build<S, V>(&self, col: S, op: Operator, val: V) -> Result<AtomaryCondition>
    where
        S: Into<String>,
        V: Into<Value>,
    {
        let col = col.into();
        let val = val.into();

        let type_ = self.check(op, &val).map_err(|e| {
            debug!(col = %col, type_name = %self.type_name, op = %op, error = %e, "Rejected condition");
            e
        })?;

        trace!(col = %col, type_name = %type_, op = %op, "Built atomary condition");
        Ok(AtomaryCondition::new(col, type_, val, op))
    }

    /// Validate `op`/`val` and return the type tag the condition carries.
    pub(crate) fn check(&self, op: Operator, val: &Value) -> Result<ConditionType> {
        if op == Operator::Between {
            return match self.type_name.family() {
                Some(Family::Numeric) => {
                    self.expect(Shape::Number, val)?;
                    Ok(ConditionType::Numeric)
                }
                Some(Family::Temporal) => {
                    self.expect(Shape::String, val)?;
                    Ok(ConditionType::Declared(self.type_name))
                }
                Some(Family::Textual) | None => Err(Error::UnsupportedOperator {
                    type_name: self.type_name.name().to_string(),
                    op: op.name().to_string(),
                }),
            };
        }

        self.expect(self.shape(), val)?;
        Ok(ConditionType::Declared(self.type_name))
    }

    fn shape(&self) -> Shape {
        match self.type_name.family() {
            Some(Family::Textual) | Some(Family::Temporal) => Shape::String,
            Some(Family::Numeric) => Shape::Number,
            None => Shape::List,
        }
    }

    fn expect(&self, shape: Shape, val: &Value) -> Result<()> {
        if shape.matches(val) {
            return Ok(());
        }
        Err(Error::TypeMismatch {
            type_name: self.type_name.name().to_string(),
            expected: shape.name(),
            actual: val.kind(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shapes_per_family() {
        assert_eq!(ConditionBuilder::text().shape(), Shape::String);
        assert_eq!(ConditionBuilder::datetime().shape(), Shape::String);
        assert_eq!(ConditionBuilder::float().shape(), Shape::Number);
        assert_eq!(ConditionBuilder::list().shape(), Shape::List);
    }

    #[test]
    fn test_build_keeps_declared_type() {
        let cond = ConditionBuilder::string()
            .build("name", Operator::Contains, "foo")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&cond).unwrap(),
            json!({"Col": "name", "Type": "string", "Val": "foo", "Op": "contains"})
        );
    }

    #[test]
    fn test_between_numeric_pseudo_type() {
        for builder in [
            ConditionBuilder::number(),
            ConditionBuilder::int(),
            ConditionBuilder::float(),
        ] {
            let cond = builder.build("grade", Operator::Between, 66).unwrap();
            assert_eq!(cond.condition_type(), ConditionType::Numeric);
            // builder is untouched by the range call
            let next = builder.build("grade", Operator::Eq, 1).unwrap();
            assert_eq!(next.condition_type(), ConditionType::Declared(builder.type_name()));
        }
    }

    #[test]
    fn test_between_rejects_pairs() {
        let err = ConditionBuilder::int()
            .build("grade", Operator::Between, vec![1, 2])
            .unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                type_name: "int".to_string(),
                expected: "number",
                actual: "array",
            }
        );
    }

    #[test]
    fn test_between_temporal_needs_string() {
        let err = ConditionBuilder::date()
            .build("created", Operator::Between, 20200101)
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { expected: "string", .. }));
    }

    #[test]
    fn test_between_unsupported() {
        for builder in [ConditionBuilder::textis(), ConditionBuilder::list()] {
            let err = builder.build("x", Operator::Between, "a").unwrap_err();
            assert!(matches!(err, Error::UnsupportedOperator { .. }));
        }
    }

    #[test]
    fn test_no_coercion() {
        let err = ConditionBuilder::number()
            .build("grade", Operator::Eq, "66")
            .unwrap_err();
        assert_eq!(err.to_string(), "[number condition] number value expected, got string");

        assert!(ConditionBuilder::text().build("a", Operator::Eq, true).is_err());
    }

    #[test]
    fn test_operator_family_not_checked() {
        let cond = ConditionBuilder::number().build("grade", Operator::Contains, 6);
        assert!(cond.is_ok());
    }
}
