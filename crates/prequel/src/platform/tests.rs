use super::*;
use proptest::prelude::*;

#[test]
fn bit_or_basic_identities() {
    let f = |args: &[Value]| execute("BIT_OR", args).expect("BIT_OR");

    assert_eq!(f(&[Value::Int(1), Value::Int(2)]), Value::Int(3));
    assert_eq!(f(&[Value::Int(3), Value::Int(2)]), Value::Int(3));
    assert_eq!(f(&[Value::Int(0), Value::Int(77)]), Value::Int(77));
}

#[test]
fn bit_or_widens_uint_arguments() {
    assert_eq!(
        execute("BIT_OR", &[Value::Uint(1), Value::Int(2)]).expect("BIT_OR"),
        Value::Int(3)
    );

    let err = execute("BIT_OR", &[Value::Uint(u64::MAX), Value::Int(0)]).unwrap_err();
    assert!(matches!(err, FunctionError::InvalidArgument { .. }));
}

#[test]
fn bit_and_and_xor() {
    assert_eq!(
        execute("BIT_AND", &[Value::Int(6), Value::Int(3)]).expect("BIT_AND"),
        Value::Int(2)
    );
    assert_eq!(
        execute("BIT_XOR", &[Value::Int(6), Value::Int(3)]).expect("BIT_XOR"),
        Value::Int(5)
    );
}

#[test]
fn bit_not_is_twos_complement() {
    assert_eq!(
        execute("BIT_NOT", &[Value::Int(0)]).expect("BIT_NOT"),
        Value::Int(-1)
    );

    let err = execute("BIT_NOT", &[Value::Int(0), Value::Int(1)]).unwrap_err();
    assert!(matches!(err, FunctionError::Arity { found: 2, .. }));
}

#[test]
fn bit_shifts_check_the_amount() {
    assert_eq!(
        execute("BIT_SHL", &[Value::Int(1), Value::Int(4)]).expect("BIT_SHL"),
        Value::Int(16)
    );
    assert_eq!(
        execute("BIT_SHR", &[Value::Int(16), Value::Int(4)]).expect("BIT_SHR"),
        Value::Int(1)
    );

    for amount in [Value::Int(64), Value::Int(-1)] {
        let err = execute("BIT_SHL", &[Value::Int(1), amount]).unwrap_err();
        assert!(matches!(err, FunctionError::InvalidArgument { .. }));
    }
}

#[test]
fn trim_strips_unicode_whitespace() {
    assert_eq!(
        execute("TRIM", &[Value::Text("  a b  ".to_string())]).expect("TRIM"),
        Value::Text("a b".to_string())
    );
    assert_eq!(
        execute("TRIM", &[Value::Text("\u{a0}\tx\n".to_string())]).expect("TRIM"),
        Value::Text("x".to_string())
    );
}

#[test]
fn trim_rejects_wrong_arity_and_non_text() {
    let err = execute("TRIM", &[]).unwrap_err();
    assert!(matches!(err, FunctionError::Arity { found: 0, .. }));

    let err = execute("TRIM", &[Value::Int(1)]).unwrap_err();
    assert!(matches!(err, FunctionError::InvalidArgument { .. }));
}

#[test]
fn concat_joins_in_order() {
    assert_eq!(
        execute(
            "CONCAT",
            &[
                Value::Text("a".to_string()),
                Value::Text("b".to_string()),
                Value::Text("c".to_string()),
            ]
        )
        .expect("CONCAT"),
        Value::Text("abc".to_string())
    );
}

#[test]
fn case_folding_executors() {
    assert_eq!(
        execute("LOWER", &[Value::Text("AbC".to_string())]).expect("LOWER"),
        Value::Text("abc".to_string())
    );
    assert_eq!(
        execute("UPPER", &[Value::Text("AbC".to_string())]).expect("UPPER"),
        Value::Text("ABC".to_string())
    );
}

#[test]
fn unknown_function_fails() {
    let err = execute("NO_SUCH_FN", &[]).unwrap_err();

    assert_eq!(
        err,
        FunctionError::Unknown {
            name: "NO_SUCH_FN".to_string()
        }
    );
}

#[test]
fn lookup_is_case_insensitive() {
    assert!(is_registered("bit_or"));
    assert!(is_registered("Trim"));
    assert!(!is_registered("no_such_fn"));

    assert_eq!(
        execute("bit_or", &[Value::Int(1), Value::Int(2)]).expect("BIT_OR"),
        Value::Int(3)
    );
}

#[test]
fn registered_stub_fails_loudly() {
    register("soundex_stub", Box::new(StubExecutor::new("SOUNDEX_STUB")));

    let err = execute("SOUNDEX_STUB", &[Value::Text("x".to_string())]).unwrap_err();

    assert_eq!(
        err,
        FunctionError::Unimplemented {
            name: "SOUNDEX_STUB".to_string()
        }
    );
}

proptest! {
    #[test]
    fn bit_or_zero_is_identity(x in any::<i64>()) {
        let out = execute("BIT_OR", &[Value::Int(0), Value::Int(x)]).expect("BIT_OR");

        prop_assert_eq!(out, Value::Int(x));
    }

    #[test]
    fn bit_or_is_commutative(a in any::<i64>(), b in any::<i64>()) {
        let left = execute("BIT_OR", &[Value::Int(a), Value::Int(b)]).expect("BIT_OR");
        let right = execute("BIT_OR", &[Value::Int(b), Value::Int(a)]).expect("BIT_OR");

        prop_assert_eq!(left, right);
    }

    #[test]
    fn bit_or_is_associative(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let flat = execute("BIT_OR", &[Value::Int(a), Value::Int(b), Value::Int(c)])
            .expect("BIT_OR");

        let ab = execute("BIT_OR", &[Value::Int(a), Value::Int(b)]).expect("BIT_OR");
        let nested = execute("BIT_OR", &[ab, Value::Int(c)]).expect("BIT_OR");

        prop_assert_eq!(flat, nested);
    }
}
