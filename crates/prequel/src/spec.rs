use crate::{
    context::QueryContext,
    error::SpecError,
    traits::{Filter, QueryModifier, Specification},
};

///
/// SpecKind
///
/// Hook implemented per named domain rule. `spec()` returns the composed
/// tree representing the rule and is invoked once per render/modify call,
/// never cached; if construction is expensive, caching is the implementor's
/// concern. `context()` optionally fixes the resolution context for the
/// whole rule.
///

pub trait SpecKind {
    fn spec(&self) -> Box<dyn Specification>;

    fn context(&self) -> Option<&str> {
        None
    }
}

///
/// BaseSpecification
///
/// Adapter giving named, reusable specifications a stable public contract.
/// Stateless after construction; delegates every pass to the tree produced
/// by the inner kind, resolving the effective alias first (kind override
/// beats the caller's fallback).
///

pub struct BaseSpecification<K: SpecKind> {
    kind: K,
}

impl<K: SpecKind> BaseSpecification<K> {
    pub const fn new(kind: K) -> Self {
        Self { kind }
    }

    #[must_use]
    pub const fn kind(&self) -> &K {
        &self.kind
    }

    fn effective<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.kind.context().unwrap_or(fallback)
    }
}

impl<K: SpecKind> Specification for BaseSpecification<K> {
    fn as_filter(&self) -> Option<&dyn Filter> {
        Some(self)
    }

    fn as_modifier(&self) -> Option<&dyn QueryModifier> {
        Some(self)
    }
}

impl<K: SpecKind> Filter for BaseSpecification<K> {
    fn render(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError> {
        let alias = self.effective(alias);
        let spec = self.kind.spec();

        match spec.as_filter() {
            Some(filter) => filter.render(qc, alias),
            None => Ok(String::new()),
        }
    }
}

impl<K: SpecKind> QueryModifier for BaseSpecification<K> {
    fn apply(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<(), SpecError> {
        let alias = self.effective(alias);
        let spec = self.kind.spec();

        match spec.as_modifier() {
            Some(modifier) => modifier.apply(qc, alias),
            None => Ok(()),
        }
    }
}
