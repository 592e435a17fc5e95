//! Leaf query modifiers: ordering, grouping, joining, and pagination
//! mutations applied to the query context. Modifiers contribute nothing to
//! the predicate pass; rendering and mutation are separate passes with no
//! interaction.


use crate::{
    context::QueryContext,
    error::SpecError,
    operand::Operand,
    traits::{QueryModifier, Specification},
};
use serde::{Deserialize, Serialize};

///
/// OrderDirection
///
/// Closed enum; invalid direction literals are unrepresentable by
/// construction.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

///
/// OrderBy
///

#[derive(Clone, Debug)]
pub struct OrderBy {
    field: Operand,
    direction: OrderDirection,
    context: Option<String>,
}

impl OrderBy {
    pub fn new(field: impl Into<Operand>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
            context: None,
        }
    }

    pub fn asc(field: impl Into<Operand>) -> Self {
        Self::new(field, OrderDirection::Asc)
    }

    pub fn desc(field: impl Into<Operand>) -> Self {
        Self::new(field, OrderDirection::Desc)
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl Specification for OrderBy {
    fn as_modifier(&self) -> Option<&dyn QueryModifier> {
        Some(self)
    }
}

impl QueryModifier for OrderBy {
    fn apply(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<(), SpecError> {
        let alias = self.context.as_deref().unwrap_or(alias);
        let path = self.field.resolve(qc, alias)?;

        qc.add_order_by(&path, self.direction);

        Ok(())
    }
}

///
/// GroupBy
///

#[derive(Clone, Debug)]
pub struct GroupBy {
    field: Operand,
    context: Option<String>,
}

impl GroupBy {
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

impl Specification for GroupBy {
    fn as_modifier(&self) -> Option<&dyn QueryModifier> {
        Some(self)
    }
}

impl QueryModifier for GroupBy {
    fn apply(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<(), SpecError> {
        let alias = self.context.as_deref().unwrap_or(alias);
        let path = self.field.resolve(qc, alias)?;

        qc.add_group_by(&path);

        Ok(())
    }
}

///
/// JoinKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
}

///
/// Join
///
/// Joins a relation path under a new alias. The path resolves against the
/// effective alias of this node; children rendered under `new_alias` must
/// set their own context override.
///

#[derive(Clone, Debug)]
pub struct Join {
    kind: JoinKind,
    path: Operand,
    new_alias: String,
    context: Option<String>,
}

impl Join {
    pub fn new(kind: JoinKind, path: impl Into<Operand>, new_alias: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            new_alias: new_alias.into(),
            context: None,
        }
    }

    pub fn inner(path: impl Into<Operand>, new_alias: impl Into<String>) -> Self {
        Self::new(JoinKind::Inner, path, new_alias)
    }

    pub fn left(path: impl Into<Operand>, new_alias: impl Into<String>) -> Self {
        Self::new(JoinKind::Left, path, new_alias)
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl Specification for Join {
    fn as_modifier(&self) -> Option<&dyn QueryModifier> {
        Some(self)
    }
}

impl QueryModifier for Join {
    fn apply(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<(), SpecError> {
        let alias = self.context.as_deref().unwrap_or(alias);
        let path = self.path.resolve(qc, alias)?;

        qc.add_join(self.kind, &path, &self.new_alias);

        Ok(())
    }
}

///
/// Limit
///

#[derive(Clone, Copy, Debug)]
pub struct Limit {
    limit: u32,
}

impl Limit {
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self { limit }
    }
}

impl Specification for Limit {
    fn as_modifier(&self) -> Option<&dyn QueryModifier> {
        Some(self)
    }
}

impl QueryModifier for Limit {
    fn apply(&self, qc: &mut dyn QueryContext, _alias: &str) -> Result<(), SpecError> {
        qc.set_limit(self.limit);

        Ok(())
    }
}

///
/// Offset
///

#[derive(Clone, Copy, Debug)]
pub struct Offset {
    offset: u32,
}

impl Offset {
    #[must_use]
    pub const fn new(offset: u32) -> Self {
        Self { offset }
    }
}

impl Specification for Offset {
    fn as_modifier(&self) -> Option<&dyn QueryModifier> {
        Some(self)
    }
}

impl QueryModifier for Offset {
    fn apply(&self, qc: &mut dyn QueryContext, _alias: &str) -> Result<(), SpecError> {
        qc.set_offset(self.offset);

        Ok(())
    }
}
