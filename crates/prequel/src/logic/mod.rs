//! Logic composite: the composition core. `LogicX` combines any mix of
//! specification children under a single boolean connector across all three
//! capabilities; `Not` negates a single child.


use crate::{
    candidate::Candidate,
    context::QueryContext,
    error::SpecError,
    traits::{Filter, QueryModifier, Satisfiable, Specification},
};
use serde::{Deserialize, Serialize};

///
/// Connector
///
/// Boolean combination rule, fixed at construction. `name()` is the
/// collaborator-protocol combinator name dispatched through
/// `ExpressionBuilder::combine`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "andX",
            Self::Or => "orX",
        }
    }
}

///
/// LogicX
///
/// Composite over an ordered, append-only sequence of children. Child order
/// is insertion order: it fixes fragment argument order and short-circuit
/// evaluation order, and it is the side-effect order for modifier children.
///
/// A child lacking a capability is skipped for that pass. Skipping is the
/// intentional gap for in-memory evaluation: query-only predicates have no
/// in-memory meaning and are treated as vacuously true.
///

pub struct LogicX {
    connector: Connector,
    children: Vec<Box<dyn Specification>>,
}

impl LogicX {
    #[must_use]
    pub fn new(connector: Connector, children: Vec<Box<dyn Specification>>) -> Self {
        let mut node = Self {
            connector,
            children: Vec::with_capacity(children.len()),
        };

        for child in children {
            node.append(child);
        }

        node
    }

    #[must_use]
    pub fn and_x(children: Vec<Box<dyn Specification>>) -> Self {
        Self::new(Connector::And, children)
    }

    #[must_use]
    pub fn or_x(children: Vec<Box<dyn Specification>>) -> Self {
        Self::new(Connector::Or, children)
    }

    #[must_use]
    pub const fn connector(&self) -> Connector {
        self.connector
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    // Extension point for variadic constructors; not public, so trees cannot
    // mutate after construction.
    pub(crate) fn append(&mut self, child: Box<dyn Specification>) {
        self.children.push(child);
    }
}

impl Specification for LogicX {
    fn as_filter(&self) -> Option<&dyn Filter> {
        Some(self)
    }

    fn as_modifier(&self) -> Option<&dyn QueryModifier> {
        Some(self)
    }

    fn as_satisfiable(&self) -> Option<&dyn Satisfiable> {
        Some(self)
    }
}

impl Filter for LogicX {
    fn render(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError> {
        let mut fragments = Vec::new();
        for child in &self.children {
            if let Some(filter) = child.as_filter() {
                let fragment = filter.render(qc, alias)?;
                if !fragment.is_empty() {
                    fragments.push(fragment);
                }
            }
        }

        // No usable fragments means no predicate contributed, not an error.
        // The outer builder treats the absent fragment as "no constraint",
        // which is an AND-identity but not an OR-identity; the asymmetry is
        // deliberate.
        if fragments.is_empty() {
            return Ok(String::new());
        }

        let expr = qc.expr();
        expr.combine(self.connector.name(), &fragments)
            .ok_or_else(|| SpecError::Configuration {
                builder: expr.name().to_string(),
                combinator: self.connector.name().to_string(),
            })
    }
}

impl QueryModifier for LogicX {
    fn apply(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<(), SpecError> {
        // Mutations never short-circuit and are independent of the render
        // pass.
        for child in &self.children {
            if let Some(modifier) = child.as_modifier() {
                modifier.apply(qc, alias)?;
            }
        }

        Ok(())
    }
}

impl Satisfiable for LogicX {
    fn is_satisfied_by(&self, candidate: &dyn Candidate) -> bool {
        match self.connector {
            Connector::And => self
                .children
                .iter()
                .filter_map(|child| child.as_satisfiable())
                .all(|child| child.is_satisfied_by(candidate)),
            Connector::Or => {
                // Zero satisfiable children is the identity element (true)
                // for both connectors, so Or must track whether any were
                // seen.
                let mut seen = false;
                for child in &self.children {
                    if let Some(child) = child.as_satisfiable() {
                        seen = true;
                        if child.is_satisfied_by(candidate) {
                            return true;
                        }
                    }
                }

                !seen
            }
        }
    }
}

///
/// Not
///
/// Negation over exactly one child. There is no modifier capability:
/// negating a mutation is meaningless.
///

pub struct Not {
    inner: Box<dyn Specification>,
}

impl Not {
    #[must_use]
    pub fn new(inner: Box<dyn Specification>) -> Self {
        Self { inner }
    }
}

impl Specification for Not {
    fn as_filter(&self) -> Option<&dyn Filter> {
        Some(self)
    }

    fn as_satisfiable(&self) -> Option<&dyn Satisfiable> {
        Some(self)
    }
}

impl Filter for Not {
    fn render(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError> {
        let fragment = match self.inner.as_filter() {
            Some(filter) => filter.render(qc, alias)?,
            None => String::new(),
        };

        // An empty child fragment renders empty: nothing to negate.
        if fragment.is_empty() {
            return Ok(String::new());
        }

        Ok(qc.expr().not(&fragment))
    }
}

impl Satisfiable for Not {
    fn is_satisfied_by(&self, candidate: &dyn Candidate) -> bool {
        // The skip rule applies before negation: a query-only child has no
        // in-memory meaning to negate, so the node is vacuously true.
        match self.inner.as_satisfiable() {
            Some(inner) => !inner.is_satisfied_by(candidate),
            None => true,
        }
    }
}

///
/// and_x! / or_x!
///
/// Variadic composite constructors; each argument is boxed in order.
///

#[macro_export]
macro_rules! and_x {
    ($($child:expr),* $(,)?) => {
        $crate::logic::LogicX::and_x(vec![
            $(Box::new($child) as Box<dyn $crate::traits::Specification>,)*
        ])
    };
}

#[macro_export]
macro_rules! or_x {
    ($($child:expr),* $(,)?) => {
        $crate::logic::LogicX::or_x(vec![
            $(Box::new($child) as Box<dyn $crate::traits::Specification>,)*
        ])
    };
}
