//! Collaborator contracts: the mutable query-construction context and its
//! expression-builder surface. Prequel never implements a production query
//! builder; it only renders fragments and mutation sequences against these
//! traits.

use crate::{
    query::{JoinKind, OrderDirection},
    value::Value,
};

///
/// QueryContext
///
/// The external, mutable query-construction object passed into every
/// render/modify call. One context is a single mutable resource for one
/// render/modify pass; the `&mut` discipline enforces single-writer access
/// per pass.
///

pub trait QueryContext {
    /// The expression-builder surface used to shape predicate fragments.
    fn expr(&self) -> &dyn ExpressionBuilder;

    /// Register a parameter value and return its placeholder fragment.
    fn bind(&mut self, value: Value) -> String;

    fn add_order_by(&mut self, path: &str, direction: OrderDirection);

    fn add_group_by(&mut self, path: &str);

    fn add_join(&mut self, kind: JoinKind, path: &str, new_alias: &str);

    fn set_limit(&mut self, limit: u32);

    fn set_offset(&mut self, offset: u32);
}

///
/// ExpressionBuilder
///
/// Fragment factory owned by the query context. Combinators are dispatched
/// by name so composites stay agnostic of the concrete builder; `combine`
/// returning `None` means the named combinator is not part of this builder's
/// surface and surfaces as a configuration error at render time.
///
/// The provided defaults are SQL-shaped. Builders targeting another fragment
/// grammar override selectively.
///

pub trait ExpressionBuilder {
    /// Builder identity, used in configuration errors.
    fn name(&self) -> &'static str;

    /// Named n-ary combinator dispatch.
    ///
    /// A single fragment passes through unchanged; multiple fragments are
    /// joined and parenthesized to preserve precedence under nesting.
    fn combine(&self, connector: &str, fragments: &[String]) -> Option<String> {
        match connector {
            "andX" => Some(join_connective(fragments, " AND ")),
            "orX" => Some(join_connective(fragments, " OR ")),
            _ => None,
        }
    }

    fn eq(&self, lhs: &str, rhs: &str) -> String {
        format!("{lhs} = {rhs}")
    }

    fn ne(&self, lhs: &str, rhs: &str) -> String {
        format!("{lhs} <> {rhs}")
    }

    fn lt(&self, lhs: &str, rhs: &str) -> String {
        format!("{lhs} < {rhs}")
    }

    fn lte(&self, lhs: &str, rhs: &str) -> String {
        format!("{lhs} <= {rhs}")
    }

    fn gt(&self, lhs: &str, rhs: &str) -> String {
        format!("{lhs} > {rhs}")
    }

    fn gte(&self, lhs: &str, rhs: &str) -> String {
        format!("{lhs} >= {rhs}")
    }

    fn in_list(&self, lhs: &str, items: &[String]) -> String {
        format!("{lhs} IN ({})", items.join(", "))
    }

    fn not_in_list(&self, lhs: &str, items: &[String]) -> String {
        format!("{lhs} NOT IN ({})", items.join(", "))
    }

    fn is_null(&self, path: &str) -> String {
        format!("{path} IS NULL")
    }

    fn is_not_null(&self, path: &str) -> String {
        format!("{path} IS NOT NULL")
    }

    fn like(&self, path: &str, pattern: &str) -> String {
        format!("{path} LIKE {pattern}")
    }

    fn not(&self, fragment: &str) -> String {
        format!("NOT ({fragment})")
    }

    fn func(&self, name: &str, args: &[String]) -> String {
        format!("{name}({})", args.join(", "))
    }
}

fn join_connective(fragments: &[String], connective: &str) -> String {
    match fragments {
        [] => String::new(),
        [single] => single.clone(),
        many => format!("({})", many.join(connective)),
    }
}
