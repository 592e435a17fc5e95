use thiserror::Error as ThisError;

///
/// SpecError
///
/// Failures surfaced while rendering or applying a specification tree.
/// Composite nodes never catch or translate child errors; every failure
/// propagates unchanged to the top-level caller.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SpecError {
    #[error("expression builder '{builder}' does not expose combinator '{combinator}'")]
    Configuration { builder: String, combinator: String },

    #[error("{0}")]
    Function(#[from] FunctionError),
}

///
/// FunctionError
///
/// Platform-function failures. A declared stub must fail loudly with
/// `Unimplemented` rather than return an unspecified default.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FunctionError {
    #[error("unknown platform function: {name}")]
    Unknown { name: String },

    #[error("platform function {name} is not implemented")]
    Unimplemented { name: String },

    #[error("platform function {name} expects {expected} arguments, found {found}")]
    Arity {
        name: String,
        expected: String,
        found: usize,
    },

    #[error("invalid argument for platform function {name}: {reason}")]
    InvalidArgument { name: String, reason: String },
}

impl FunctionError {
    pub(crate) fn arity(name: &str, expected: impl Into<String>, found: usize) -> Self {
        Self::Arity {
            name: name.to_string(),
            expected: expected.into(),
            found,
        }
    }

    pub(crate) fn invalid_argument(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
