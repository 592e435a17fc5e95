use crate::value::Value;
use std::collections::BTreeMap;

///
/// Candidate
///
/// Field access for in-memory predicate evaluation. Leaves decide which
/// field they inspect; the composite only orchestrates boolean combination.
///

pub trait Candidate {
    fn get_value(&self, field: &str) -> Option<Value>;
}

impl Candidate for BTreeMap<String, Value> {
    fn get_value(&self, field: &str) -> Option<Value> {
        self.get(field).cloned()
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn get_value(&self, field: &str) -> Option<Value> {
        (**self).get_value(field)
    }
}
