//! Shared recording stubs for unit tests.

use crate::{
    candidate::Candidate,
    context::{ExpressionBuilder, QueryContext},
    query::{JoinKind, OrderDirection},
    traits::{Satisfiable, Specification},
    value::Value,
};
use std::{cell::Cell, collections::BTreeMap, rc::Rc};

///
/// SqlExpr
///
/// Expression builder using the provided SQL-shaped defaults.
///

pub(crate) struct SqlExpr;

impl ExpressionBuilder for SqlExpr {
    fn name(&self) -> &'static str {
        "sql"
    }
}

///
/// BareExpr
///
/// Expression builder without combinators, for configuration-error paths.
///

pub(crate) struct BareExpr;

impl ExpressionBuilder for BareExpr {
    fn name(&self) -> &'static str {
        "bare"
    }

    fn combine(&self, _connector: &str, _fragments: &[String]) -> Option<String> {
        None
    }
}

///
/// RecordingQuery
///
/// Query context that records every bind and mutation for assertions.
/// Placeholders are positional (`:p1`, `:p2`, ...).
///

#[derive(Default)]
pub(crate) struct RecordingQuery {
    pub(crate) binds: Vec<Value>,
    pub(crate) order_by: Vec<(String, OrderDirection)>,
    pub(crate) group_by: Vec<String>,
    pub(crate) joins: Vec<(JoinKind, String, String)>,
    pub(crate) limit: Option<u32>,
    pub(crate) offset: Option<u32>,
}

impl QueryContext for RecordingQuery {
    fn expr(&self) -> &dyn ExpressionBuilder {
        &SqlExpr
    }

    fn bind(&mut self, value: Value) -> String {
        self.binds.push(value);
        format!(":p{}", self.binds.len())
    }

    fn add_order_by(&mut self, path: &str, direction: OrderDirection) {
        self.order_by.push((path.to_string(), direction));
    }

    fn add_group_by(&mut self, path: &str) {
        self.group_by.push(path.to_string());
    }

    fn add_join(&mut self, kind: JoinKind, path: &str, new_alias: &str) {
        self.joins
            .push((kind, path.to_string(), new_alias.to_string()));
    }

    fn set_limit(&mut self, limit: u32) {
        self.limit = Some(limit);
    }

    fn set_offset(&mut self, offset: u32) {
        self.offset = Some(offset);
    }
}

///
/// BareQuery
///
/// Query context over [`BareExpr`].
///

#[derive(Default)]
pub(crate) struct BareQuery {
    binds: Vec<Value>,
}

impl QueryContext for BareQuery {
    fn expr(&self) -> &dyn ExpressionBuilder {
        &BareExpr
    }

    fn bind(&mut self, value: Value) -> String {
        self.binds.push(value);
        format!(":p{}", self.binds.len())
    }

    fn add_order_by(&mut self, _path: &str, _direction: OrderDirection) {}

    fn add_group_by(&mut self, _path: &str) {}

    fn add_join(&mut self, _kind: JoinKind, _path: &str, _new_alias: &str) {}

    fn set_limit(&mut self, _limit: u32) {}

    fn set_offset(&mut self, _offset: u32) {}
}

///
/// CountingSpec
///
/// Satisfiable stub returning a fixed verdict and counting evaluations, for
/// short-circuit assertions.
///

pub(crate) struct CountingSpec {
    verdict: bool,
    calls: Rc<Cell<usize>>,
}

impl CountingSpec {
    pub(crate) fn new(verdict: bool) -> Self {
        Self {
            verdict,
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Handle onto the evaluation counter, usable after the stub is boxed
    /// into a tree.
    pub(crate) fn counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl Specification for CountingSpec {
    fn as_satisfiable(&self) -> Option<&dyn Satisfiable> {
        Some(self)
    }
}

impl Satisfiable for CountingSpec {
    fn is_satisfied_by(&self, _candidate: &dyn Candidate) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.verdict
    }
}

/// Build a map-backed candidate from field/value pairs.
pub(crate) fn candidate(fields: &[(&str, Value)]) -> BTreeMap<String, Value> {
    fields
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect()
}
