use crate::{
    error::FunctionError,
    platform::FunctionExecutor,
    value::Value,
};

///
/// Bit-wise executor family
///
/// All bit operations work over two's-complement `i64`. `Uint` arguments
/// widen when they fit in `i64`; anything else is an invalid argument.
///

pub struct BitAnd;

impl FunctionExecutor for BitAnd {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        bit_reduce("BIT_AND", args, |acc, item| acc & item)
    }
}

pub struct BitOr;

impl FunctionExecutor for BitOr {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        bit_reduce("BIT_OR", args, |acc, item| acc | item)
    }
}

pub struct BitXor;

impl FunctionExecutor for BitXor {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        bit_reduce("BIT_XOR", args, |acc, item| acc ^ item)
    }
}

pub struct BitNot;

impl FunctionExecutor for BitNot {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        const NAME: &str = "BIT_NOT";

        let [arg] = args else {
            return Err(FunctionError::arity(NAME, "exactly 1", args.len()));
        };

        Ok(Value::Int(!int_arg(NAME, arg)?))
    }
}

pub struct BitShl;

impl FunctionExecutor for BitShl {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        bit_shift("BIT_SHL", args, |value, amount| value << amount)
    }
}

pub struct BitShr;

impl FunctionExecutor for BitShr {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        bit_shift("BIT_SHR", args, |value, amount| value >> amount)
    }
}

///
/// Text executor family
///

/// Strips leading and trailing Unicode whitespace from its single text
/// argument.
pub struct Trim;

impl FunctionExecutor for Trim {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        let text = single_text_arg("TRIM", args)?;

        Ok(Value::Text(text.trim().to_string()))
    }
}

pub struct Concat;

impl FunctionExecutor for Concat {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        const NAME: &str = "CONCAT";

        if args.is_empty() {
            return Err(FunctionError::arity(NAME, "at least 1", 0));
        }

        let mut out = String::new();
        for arg in args {
            out.push_str(text_arg(NAME, arg)?);
        }

        Ok(Value::Text(out))
    }
}

pub struct Lower;

impl FunctionExecutor for Lower {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        let text = single_text_arg("LOWER", args)?;

        Ok(Value::Text(text.to_lowercase()))
    }
}

pub struct Upper;

impl FunctionExecutor for Upper {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        let text = single_text_arg("UPPER", args)?;

        Ok(Value::Text(text.to_uppercase()))
    }
}

// ------------------------------------------------------------------
// Argument helpers
// ------------------------------------------------------------------

fn int_arg(name: &str, arg: &Value) -> Result<i64, FunctionError> {
    match arg {
        Value::Int(v) => Ok(*v),
        Value::Uint(v) => i64::try_from(*v)
            .map_err(|_| FunctionError::invalid_argument(name, format!("{v} exceeds i64 range"))),
        other => Err(FunctionError::invalid_argument(
            name,
            format!("expected an integer, found {other:?}"),
        )),
    }
}

fn text_arg<'a>(name: &str, arg: &'a Value) -> Result<&'a str, FunctionError> {
    arg.as_text()
        .ok_or_else(|| FunctionError::invalid_argument(name, format!("expected text, found {arg:?}")))
}

fn single_text_arg<'a>(name: &str, args: &'a [Value]) -> Result<&'a str, FunctionError> {
    let [arg] = args else {
        return Err(FunctionError::arity(name, "exactly 1", args.len()));
    };

    text_arg(name, arg)
}

fn bit_reduce(
    name: &str,
    args: &[Value],
    op: fn(i64, i64) -> i64,
) -> Result<Value, FunctionError> {
    if args.len() < 2 {
        return Err(FunctionError::arity(name, "at least 2", args.len()));
    }

    let mut acc = int_arg(name, &args[0])?;
    for arg in &args[1..] {
        acc = op(acc, int_arg(name, arg)?);
    }

    Ok(Value::Int(acc))
}

fn bit_shift(
    name: &str,
    args: &[Value],
    op: fn(i64, u32) -> i64,
) -> Result<Value, FunctionError> {
    let [value, amount] = args else {
        return Err(FunctionError::arity(name, "exactly 2", args.len()));
    };

    let value = int_arg(name, value)?;
    let amount = int_arg(name, amount)?;

    // Shift amounts at or beyond the operand width are rejected, never
    // wrapped.
    let amount = u32::try_from(amount)
        .ok()
        .filter(|amount| *amount < 64)
        .ok_or_else(|| {
            FunctionError::invalid_argument(name, format!("shift amount {amount} outside 0..64"))
        })?;

    Ok(Value::Int(op(value, amount)))
}
