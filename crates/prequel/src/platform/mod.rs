//! Process-wide registry of platform scalar functions.
//!
//! Executors are pure and stateless; the registry is the only shared state
//! in the crate and is seeded with the default function set on first use.

mod executors;

#[cfg(test)]
mod tests;

use crate::{error::FunctionError, value::Value};
use std::{
    collections::BTreeMap,
    sync::{Mutex, OnceLock},
};

pub use executors::{
    BitAnd, BitNot, BitOr, BitShl, BitShr, BitXor, Concat, Lower, Trim, Upper,
};

///
/// FunctionExecutor
///
/// Stateless platform scalar function: `(args) -> value`, invoked
/// synchronously. Executors live in the process-wide registry, so they must
/// be `Send`.
///

pub trait FunctionExecutor: Send {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError>;
}

///
/// StubExecutor
///
/// Declared-but-unimplemented platform function. Invoking a stub fails
/// loudly with `FunctionError::Unimplemented` rather than returning a
/// silent default.
///

pub struct StubExecutor {
    name: String,
}

impl StubExecutor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FunctionExecutor for StubExecutor {
    fn execute(&self, _args: &[Value]) -> Result<Value, FunctionError> {
        Err(FunctionError::Unimplemented {
            name: self.name.clone(),
        })
    }
}

type Registry = BTreeMap<String, Box<dyn FunctionExecutor>>;

static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();

fn registry() -> &'static Mutex<Registry> {
    REGISTRY.get_or_init(|| Mutex::new(default_registry()))
}

fn default_registry() -> Registry {
    let mut registry = Registry::new();

    let defaults: Vec<(&str, Box<dyn FunctionExecutor>)> = vec![
        ("BIT_AND", Box::new(BitAnd)),
        ("BIT_NOT", Box::new(BitNot)),
        ("BIT_OR", Box::new(BitOr)),
        ("BIT_SHL", Box::new(BitShl)),
        ("BIT_SHR", Box::new(BitShr)),
        ("BIT_XOR", Box::new(BitXor)),
        ("CONCAT", Box::new(Concat)),
        ("LOWER", Box::new(Lower)),
        ("TRIM", Box::new(Trim)),
        ("UPPER", Box::new(Upper)),
    ];

    for (name, executor) in defaults {
        registry.insert(name.to_string(), executor);
    }

    registry
}

/// Register an executor under the given name (upper-cased). Replaces any
/// existing registration, including the defaults.
pub fn register(name: &str, executor: Box<dyn FunctionExecutor>) {
    let mut registry = registry()
        .lock()
        .expect("function registry lock should not be poisoned");

    registry.insert(name.to_uppercase(), executor);
}

/// Execute the named platform function over the given arguments.
pub fn execute(name: &str, args: &[Value]) -> Result<Value, FunctionError> {
    let registry = registry()
        .lock()
        .expect("function registry lock should not be poisoned");

    let executor = registry
        .get(&name.to_uppercase())
        .ok_or_else(|| FunctionError::Unknown {
            name: name.to_string(),
        })?;

    executor.execute(args)
}

#[must_use]
pub fn is_registered(name: &str) -> bool {
    let registry = registry()
        .lock()
        .expect("function registry lock should not be poisoned");

    registry.contains_key(&name.to_uppercase())
}
