use crate::value::Value;
use std::cmp::Ordering;

/// Equality comparator for in-memory predicate evaluation.
///
/// Returns `None` for variant pairings with no defined equality; callers
/// treat an undefined comparison as a non-match. `Int` and `Uint` compare
/// numerically through `i128` widening.
#[must_use]
pub fn compare_eq(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        (Value::Int(a), Value::Int(b)) => Some(a == b),
        (Value::Uint(a), Value::Uint(b)) => Some(a == b),
        (Value::Int(a), Value::Uint(b)) => Some(i128::from(*a) == i128::from(*b)),
        (Value::Uint(a), Value::Int(b)) => Some(i128::from(*a) == i128::from(*b)),
        (Value::Text(a), Value::Text(b)) => Some(a == b),
        (Value::Null, Value::Null) => Some(true),
        (Value::List(a), Value::List(b)) => compare_eq_list(a, b),
        _ => None,
    }
}

/// Ordering comparator for in-memory predicate evaluation.
///
/// Returns `None` for non-orderable or mismatched variants, with the same
/// `Int`/`Uint` widening rule as [`compare_eq`]. Lists and nulls are not
/// orderable.
#[must_use]
pub fn compare_order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Uint(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
        (Value::Uint(a), Value::Int(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

// Element-wise equality; a single undefined pairing poisons the whole
// comparison rather than guessing.
fn compare_eq_list(left: &[Value], right: &[Value]) -> Option<bool> {
    if left.len() != right.len() {
        return Some(false);
    }

    let mut all = true;
    for (left, right) in left.iter().zip(right.iter()) {
        all &= compare_eq(left, right)?;
    }

    Some(all)
}
