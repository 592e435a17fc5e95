use crate::{candidate::Candidate, context::QueryContext, error::SpecError};

///
/// Specification
///
/// Object-safe handle over the three orthogonal capability sets. Composites
/// hold children as `Box<dyn Specification>` and perform interface-presence
/// checks through the `Option`-returning accessors; a concrete node opts in
/// to a capability by overriding the matching accessor.
///

pub trait Specification {
    fn as_filter(&self) -> Option<&dyn Filter> {
        None
    }

    fn as_modifier(&self) -> Option<&dyn QueryModifier> {
        None
    }

    fn as_satisfiable(&self) -> Option<&dyn Satisfiable> {
        None
    }
}

///
/// Filter
///
/// Predicate capability: render a boolean-expression fragment against the
/// query context. An empty fragment means "no predicate contributed" and is
/// not an error.
///

pub trait Filter {
    fn render(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError>;
}

///
/// QueryModifier
///
/// Mutation capability: apply a side-effecting change (ordering, grouping,
/// joining, pagination) to the query context.
///

pub trait QueryModifier {
    fn apply(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<(), SpecError>;
}

///
/// Satisfiable
///
/// In-memory capability: evaluate the same logical tree against a
/// materialized candidate, bypassing the query builder entirely.
///

pub trait Satisfiable {
    fn is_satisfied_by(&self, candidate: &dyn Candidate) -> bool;
}

///
/// SatisfiableExt
///
/// Lazy collection filtering over any satisfiable node. Evaluation is
/// per-element with no buffering, so unbounded candidate sources are
/// supported; each call restarts from the first candidate.
///

pub trait SatisfiableExt: Satisfiable {
    fn filter_collection<'a, C, I>(&'a self, candidates: I) -> impl Iterator<Item = C> + 'a
    where
        C: Candidate,
        I: IntoIterator<Item = C>,
        I::IntoIter: 'a,
    {
        candidates
            .into_iter()
            .filter(move |candidate| self.is_satisfied_by(candidate))
    }
}

impl<T: Satisfiable + ?Sized> SatisfiableExt for T {}
