use crate::{
    candidate::Candidate,
    context::QueryContext,
    error::SpecError,
    platform,
    value::Value,
};

///
/// Operand
///
/// Left/right-hand side of a leaf predicate. `Field` and `Alias` resolution
/// is pure; `Value` and `Function` resolution may register parameters on the
/// query context (parameter binding is the only permitted mutation).
///
/// Raw strings coerce to `Field`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operand {
    Field(Field),
    Alias(Alias),
    Value(Value),
    Function(PlatformFunction),
}

impl Operand {
    /// Resolve this operand into the fragment text used by downstream
    /// predicate factories.
    pub fn resolve(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError> {
        match self {
            Self::Field(field) => Ok(field.resolve(alias)),
            Self::Alias(path) => Ok(path.resolve()),
            Self::Value(value) => Ok(qc.bind(value.clone())),
            Self::Function(func) => func.resolve(qc, alias),
        }
    }

    /// Evaluate this operand against an in-memory candidate.
    ///
    /// A missing field, unknown function, or invalid function argument
    /// yields `None`; comparison leaves treat "no value" as a non-match.
    #[must_use]
    pub fn evaluate(&self, candidate: &dyn Candidate) -> Option<Value> {
        match self {
            Self::Field(field) => candidate.get_value(&field.name),
            Self::Alias(path) => candidate.get_value(&path.path),
            Self::Value(value) => Some(value.clone()),
            Self::Function(func) => func.evaluate(candidate),
        }
    }
}

impl From<&str> for Operand {
    fn from(name: &str) -> Self {
        Self::Field(Field::new(name))
    }
}

impl From<String> for Operand {
    fn from(name: String) -> Self {
        Self::Field(Field::new(name))
    }
}

impl From<Field> for Operand {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Alias> for Operand {
    fn from(alias: Alias) -> Self {
        Self::Alias(alias)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<PlatformFunction> for Operand {
    fn from(func: PlatformFunction) -> Self {
        Self::Function(func)
    }
}

///
/// Field
///
/// Bare column/property name, qualified against the effective alias at
/// resolution time.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    name: String,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn resolve(&self, alias: &str) -> String {
        format!("{alias}.{}", self.name)
    }
}

///
/// Alias
///
/// Pre-qualified path. Resolution returns the path verbatim and ignores the
/// passed-in alias.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alias {
    path: String,
}

impl Alias {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn resolve(&self) -> String {
        self.path.clone()
    }
}

///
/// PlatformFunction
///
/// Named platform-function call over operand arguments. Renders as
/// `NAME(arg, ...)` through the expression builder; evaluates in memory
/// through the process-wide function registry.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformFunction {
    name: String,
    args: Vec<Operand>,
}

impl PlatformFunction {
    pub fn new(name: impl Into<String>, args: Vec<Operand>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolve(&self, qc: &mut dyn QueryContext, alias: &str) -> Result<String, SpecError> {
        let mut args = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            args.push(arg.resolve(qc, alias)?);
        }

        Ok(qc.expr().func(&self.name, &args))
    }

    #[must_use]
    pub fn evaluate(&self, candidate: &dyn Candidate) -> Option<Value> {
        let mut args = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            args.push(arg.evaluate(candidate)?);
        }

        platform::execute(&self.name, &args).ok()
    }
}
