//! Composable specification layer for query predicates and query mutations.
//!
//! Small predicate objects ([`traits::Filter`]) and query-mutation objects
//! ([`traits::QueryModifier`]) combine under AND/OR/NOT into arbitrarily
//! deep trees, render against an external query-building collaborator, and
//! evaluate the same logical tree against in-memory candidates
//! ([`traits::Satisfiable`]) with identical boolean semantics in both modes.
#![warn(unreachable_pub)]

pub mod candidate;
pub mod context;
pub mod dsl;
pub mod error;
pub mod filter;
pub mod logic;
pub mod operand;
pub mod platform;
pub mod query;
pub mod spec;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Collaborator contracts, errors, and the platform registry are not
/// re-exported here.
///

pub mod prelude {
    pub use crate::{
        filter::{CompareOp, Comparison, IsNotNull, IsNull, Like, LikeFormat},
        logic::{Connector, LogicX, Not},
        operand::{Alias, Field, Operand, PlatformFunction},
        query::{GroupBy, Join, JoinKind, Limit, Offset, OrderBy, OrderDirection},
        spec::{BaseSpecification, SpecKind},
        traits::{Filter, QueryModifier, Satisfiable, SatisfiableExt, Specification},
        value::{FieldValue, Value},
    };
}
