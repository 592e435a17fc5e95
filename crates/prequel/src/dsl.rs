//! Free constructor functions for building specification trees without
//! naming the leaf types. `like` defaults to a contains match; use
//! [`Like::new`] directly for an explicit format.

use crate::{
    filter::{Comparison, IsNotNull, IsNull, Like, LikeFormat},
    logic::{LogicX, Not},
    operand::{Alias, Field, Operand, PlatformFunction},
    query::{GroupBy, Join, Limit, Offset, OrderBy},
    traits::Specification,
    value::FieldValue,
};

pub fn eq(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Comparison {
    Comparison::eq(lhs, rhs)
}

pub fn ne(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Comparison {
    Comparison::ne(lhs, rhs)
}

pub fn lt(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Comparison {
    Comparison::lt(lhs, rhs)
}

pub fn lte(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Comparison {
    Comparison::lte(lhs, rhs)
}

pub fn gt(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Comparison {
    Comparison::gt(lhs, rhs)
}

pub fn gte(lhs: impl Into<Operand>, rhs: impl FieldValue) -> Comparison {
    Comparison::gte(lhs, rhs)
}

pub fn in_list<V: FieldValue>(lhs: impl Into<Operand>, values: Vec<V>) -> Comparison {
    Comparison::in_list(lhs, values)
}

pub fn not_in_list<V: FieldValue>(lhs: impl Into<Operand>, values: Vec<V>) -> Comparison {
    Comparison::not_in_list(lhs, values)
}

pub fn is_null(field: impl Into<Operand>) -> IsNull {
    IsNull::new(field)
}

pub fn is_not_null(field: impl Into<Operand>) -> IsNotNull {
    IsNotNull::new(field)
}

pub fn like(field: impl Into<Operand>, value: impl Into<String>) -> Like {
    Like::new(field, value, LikeFormat::Contains)
}

pub fn starts_with(field: impl Into<Operand>, value: impl Into<String>) -> Like {
    Like::new(field, value, LikeFormat::StartsWith)
}

pub fn ends_with(field: impl Into<Operand>, value: impl Into<String>) -> Like {
    Like::new(field, value, LikeFormat::EndsWith)
}

pub fn order_by(field: impl Into<Operand>) -> OrderBy {
    OrderBy::asc(field)
}

pub fn order_by_desc(field: impl Into<Operand>) -> OrderBy {
    OrderBy::desc(field)
}

pub fn group_by(field: impl Into<Operand>) -> GroupBy {
    GroupBy::new(field)
}

pub fn inner_join(path: impl Into<Operand>, new_alias: impl Into<String>) -> Join {
    Join::inner(path, new_alias)
}

pub fn left_join(path: impl Into<Operand>, new_alias: impl Into<String>) -> Join {
    Join::left(path, new_alias)
}

#[must_use]
pub const fn limit(limit: u32) -> Limit {
    Limit::new(limit)
}

#[must_use]
pub const fn offset(offset: u32) -> Offset {
    Offset::new(offset)
}

pub fn not(spec: impl Specification + 'static) -> Not {
    Not::new(Box::new(spec))
}

#[must_use]
pub fn and_x(children: Vec<Box<dyn Specification>>) -> LogicX {
    LogicX::and_x(children)
}

#[must_use]
pub fn or_x(children: Vec<Box<dyn Specification>>) -> LogicX {
    LogicX::or_x(children)
}

pub fn field(name: impl Into<String>) -> Operand {
    Operand::Field(Field::new(name))
}

pub fn alias_path(path: impl Into<String>) -> Operand {
    Operand::Alias(Alias::new(path))
}

pub fn func(name: impl Into<String>, args: Vec<Operand>) -> Operand {
    Operand::Function(PlatformFunction::new(name, args))
}
