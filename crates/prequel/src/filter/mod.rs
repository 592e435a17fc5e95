//! Leaf filters: predicate adapters that produce a boolean-expression
//! fragment against the query context and evaluate the same predicate over
//! in-memory candidates.


use crate::{
    candidate::Candidate,
    context::QueryContext,
    error::SpecError,
    operand::Operand,
    traits::{Filter, Satisfiable, Specification},
    value::{FieldValue, Value, compare_eq, compare_order},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    NotIn,
}

///
/// Comparison
///
/// Binary comparison over two operands. Literal operands bind parameters on
/// the query context at render time; membership ops over a literal list bind
/// each element individually.
///

#[derive(Clone, Debug)]
pub struct Comparison {
    lhs: Operand,
    op: CompareOp,
    rhs: Operand,
    context: Option<String>,
}

impl Comparison {
    pub fn new(lhs: impl Into<Operand>, op: CompareOp, rhs: impl Into<Operand>) -> Self {
        Self {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
            context: None,
        }
    }

    pub fn eq(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Self {
        Self::new(lhs, CompareOp::Eq, rhs.to_value())
    }

    pub fn ne(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Self {
        Self::new(lhs, CompareOp::Ne, rhs.to_value())
    }

    pub fn lt(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Self {
        Self::new(lhs, CompareOp::Lt, rhs.to_value())
    }

    pub fn lte(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Self {
        Self::new(lhs, CompareOp::Lte, rhs.to_value())
    }

    pub fn gt(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Self {
        Self::new(lhs, CompareOp::Gt, rhs.to_value())
    }

    pub fn gte(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Self {
        Self::new(lhs, CompareOp::Gte, rhs.to_value())
    }

    pub fn in_list<V: FieldValue>(lhs: impl Into<Operand>, values: Vec<V>) -> Self {
        Self::new(lhs, CompareOp::In, values.to_value())
    }

    pub fn not_in_list<V: FieldValue>(lhs: impl Into<Operand>, values: Vec<V>) -> Self {
        Self::new(lhs, CompareOp::NotIn, values.to_value())
    }

    /// Fix the resolution context for this leaf, overriding the
    /// caller-supplied fallback alias.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    fn render_membership(
        &self,
        qc: &mut dyn QueryContext,
        lhs: &str,
        alias: &str,
    ) -> Result<String, SpecError> {
        // A literal list binds element-wise; any other operand resolves to a
        // single fragment.
        let items = match &self.rhs {
            Operand::Value(Value::List(items)) => items
                .iter()
                .map(|item| qc.bind(item.clone()))
                .collect::<Vec<_>>(),
            other => vec![other.resolve(qc, alias)?],
        };

        let expr = qc.expr();
        Ok(match self.op {
            CompareOp::In => expr.in_list(lhs, &items),
            _ => expr.not_in_list(lhs, &items),
        })
    }

    fn satisfied_membership(lhs: &Value, rhs: &Value, negate: bool) -> bool {
        let Value::List(items) = rhs else {
            return false;
        };

        let found = items
            .iter()
            .any(|item| compare_eq(lhs, item).unwrap_or(false));

        found != negate
    }
}

impl Specification for Comparison {
    fn as_filter(&self) -> Option<&dyn Filter> {
        Some(self)
    }

    fn as_satisfiable(&self) -> Option<&dyn Satisfiable> {
        Some(self)
    }
}

impl Filter for Comparison {
    fn render(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError> {
        let alias = self.context.as_deref().unwrap_or(alias);
        let lhs = self.lhs.resolve(qc, alias)?;

        if matches!(self.op, CompareOp::In | CompareOp::NotIn) {
            return self.render_membership(qc, &lhs, alias);
        }

        let rhs = self.rhs.resolve(qc, alias)?;
        let expr = qc.expr();

        Ok(match self.op {
            CompareOp::Ne => expr.ne(&lhs, &rhs),
            CompareOp::Lt => expr.lt(&lhs, &rhs),
            CompareOp::Lte => expr.lte(&lhs, &rhs),
            CompareOp::Gt => expr.gt(&lhs, &rhs),
            CompareOp::Gte => expr.gte(&lhs, &rhs),
            _ => expr.eq(&lhs, &rhs),
        })
    }
}

impl Satisfiable for Comparison {
    fn is_satisfied_by(&self, candidate: &dyn Candidate) -> bool {
        let Some(lhs) = self.lhs.evaluate(candidate) else {
            return false;
        };
        let Some(rhs) = self.rhs.evaluate(candidate) else {
            return false;
        };

        match self.op {
            CompareOp::Eq => compare_eq(&lhs, &rhs).unwrap_or(false),
            CompareOp::Ne => compare_eq(&lhs, &rhs).is_some_and(|v| !v),
            CompareOp::Lt => compare_order(&lhs, &rhs).is_some_and(Ordering::is_lt),
            CompareOp::Lte => compare_order(&lhs, &rhs).is_some_and(Ordering::is_le),
            CompareOp::Gt => compare_order(&lhs, &rhs).is_some_and(Ordering::is_gt),
            CompareOp::Gte => compare_order(&lhs, &rhs).is_some_and(Ordering::is_ge),
            CompareOp::In => Self::satisfied_membership(&lhs, &rhs, false),
            CompareOp::NotIn => Self::satisfied_membership(&lhs, &rhs, true),
        }
    }
}

///
/// IsNull
///
/// Holds only for a present field whose value is `Value::Null`; a missing
/// field is not null.
///

#[derive(Clone, Debug)]
pub struct IsNull {
    field: Operand,
    context: Option<String>,
}

impl IsNull {
    pub fn new(field: impl Into<Operand>) -> Self {
        Self {
            field: field.into(),
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl Specification for IsNull {
    fn as_filter(&self) -> Option<&dyn Filter> {
        Some(self)
    }

    fn as_satisfiable(&self) -> Option<&dyn Satisfiable> {
        Some(self)
    }
}

impl Filter for IsNull {
    fn render(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError> {
        let alias = self.context.as_deref().unwrap_or(alias);
        let path = self.field.resolve(qc, alias)?;

        Ok(qc.expr().is_null(&path))
    }
}

impl Satisfiable for IsNull {
    fn is_satisfied_by(&self, candidate: &dyn Candidate) -> bool {
        matches!(self.field.evaluate(candidate), Some(Value::Null))
    }
}

///
/// IsNotNull
///

#[derive(Clone, Debug)]
pub struct IsNotNull {
    field: Operand,
    context: Option<String>,
}

impl IsNotNull {
    pub fn new(field: impl Into<Operand>) -> Self {
        Self {
            field: field.into(),
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl Specification for IsNotNull {
    fn as_filter(&self) -> Option<&dyn Filter> {
        Some(self)
    }

    fn as_satisfiable(&self) -> Option<&dyn Satisfiable> {
        Some(self)
    }
}

impl Filter for IsNotNull {
    fn render(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError> {
        let alias = self.context.as_deref().unwrap_or(alias);
        let path = self.field.resolve(qc, alias)?;

        Ok(qc.expr().is_not_null(&path))
    }
}

impl Satisfiable for IsNotNull {
    fn is_satisfied_by(&self, candidate: &dyn Candidate) -> bool {
        self.field
            .evaluate(candidate)
            .is_some_and(|value| !value.is_null())
    }
}

///
/// LikeFormat
///
/// How the bound value is wrapped into a SQL pattern.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LikeFormat {
    Contains,
    StartsWith,
    EndsWith,
    Literal,
}

///
/// Like
///
/// Pattern match over a text field. The pattern is built from the raw value
/// (`%v%`, `v%`, `%v`, `v`) and bound as a parameter. In-memory evaluation
/// is a case-sensitive substring/prefix/suffix/equality test; `%` and `_`
/// inside the value are not interpreted.
///

#[derive(Clone, Debug)]
pub struct Like {
    field: Operand,
    value: String,
    format: LikeFormat,
    context: Option<String>,
}

impl Like {
    pub fn new(field: impl Into<Operand>, value: impl Into<String>, format: LikeFormat) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            format,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    fn pattern(&self) -> String {
        let v = &self.value;
        match self.format {
            LikeFormat::Contains => format!("%{v}%"),
            LikeFormat::StartsWith => format!("{v}%"),
            LikeFormat::EndsWith => format!("%{v}"),
            LikeFormat::Literal => v.clone(),
        }
    }
}

impl Specification for Like {
    fn as_filter(&self) -> Option<&dyn Filter> {
        Some(self)
    }

    fn as_satisfiable(&self) -> Option<&dyn Satisfiable> {
        Some(self)
    }
}

impl Filter for Like {
    fn render(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError> {
        let alias = self.context.as_deref().unwrap_or(alias);
        let path = self.field.resolve(qc, alias)?;
        let placeholder = qc.bind(Value::Text(self.pattern()));

        Ok(qc.expr().like(&path, &placeholder))
    }
}

impl Satisfiable for Like {
    fn is_satisfied_by(&self, candidate: &dyn Candidate) -> bool {
        let Some(value) = self.field.evaluate(candidate) else {
            return false;
        };
        let Some(text) = value.as_text() else {
            return false;
        };

        match self.format {
            LikeFormat::Contains => text.contains(&self.value),
            LikeFormat::StartsWith => text.starts_with(&self.value),
            LikeFormat::EndsWith => text.ends_with(&self.value),
            LikeFormat::Literal => text == self.value,
        }
    }
}
