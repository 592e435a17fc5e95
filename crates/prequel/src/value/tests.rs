use super::*;
use proptest::prelude::*;
use std::cmp::Ordering;

#[test]
fn int_uint_equality_widens() {
    assert_eq!(compare_eq(&Value::Int(3), &Value::Uint(3)), Some(true));
    assert_eq!(compare_eq(&Value::Uint(3), &Value::Int(3)), Some(true));
    assert_eq!(compare_eq(&Value::Int(-1), &Value::Uint(u64::MAX)), Some(false));
}

#[test]
fn int_uint_ordering_widens() {
    assert_eq!(
        compare_order(&Value::Int(-1), &Value::Uint(0)),
        Some(Ordering::Less)
    );
    assert_eq!(
        compare_order(&Value::Uint(u64::MAX), &Value::Int(i64::MAX)),
        Some(Ordering::Greater)
    );
}

#[test]
fn mismatched_variants_are_undefined() {
    assert_eq!(compare_eq(&Value::Bool(true), &Value::Int(1)), None);
    assert_eq!(compare_eq(&Value::Text("1".to_string()), &Value::Int(1)), None);
    assert_eq!(compare_order(&Value::Null, &Value::Null), None);
    assert_eq!(compare_order(&Value::List(vec![]), &Value::List(vec![])), None);
}

#[test]
fn list_equality_is_element_wise() {
    let a = Value::List(vec![Value::Int(1), Value::Text("x".to_string())]);
    let b = Value::List(vec![Value::Int(1), Value::Text("x".to_string())]);
    let c = Value::List(vec![Value::Int(1)]);

    assert_eq!(compare_eq(&a, &b), Some(true));
    assert_eq!(compare_eq(&a, &c), Some(false));

    // Undefined element pairing poisons the comparison.
    let d = Value::List(vec![Value::Bool(true), Value::Text("x".to_string())]);
    assert_eq!(compare_eq(&a, &d), None);
}

#[test]
fn field_value_conversions() {
    assert_eq!(42u8.to_value(), Value::Uint(42));
    assert_eq!((-7i32).to_value(), Value::Int(-7));
    assert_eq!("abc".to_value(), Value::Text("abc".to_string()));
    assert_eq!(None::<i64>.to_value(), Value::Null);
    assert_eq!(Some(true).to_value(), Value::Bool(true));
    assert_eq!(
        vec![1u64, 2, 3].to_value(),
        Value::List(vec![Value::Uint(1), Value::Uint(2), Value::Uint(3)])
    );
}

#[test]
fn value_serde_round_trip() {
    let values = [
        Value::Bool(true),
        Value::Int(-42),
        Value::Uint(42),
        Value::Null,
        Value::Text("hello".to_string()),
        Value::List(vec![Value::Int(1), Value::Null]),
    ];

    for value in values {
        let json = serde_json::to_string(&value).expect("value encode");
        let decoded: Value = serde_json::from_str(&json).expect("value decode");

        assert_eq!(decoded, value, "Value round trip failed for {value:?}");
    }
}

proptest! {
    #[test]
    fn same_variant_ordering_agrees_with_equality(a in any::<i64>(), b in any::<i64>()) {
        let left = Value::Int(a);
        let right = Value::Int(b);

        let eq = compare_eq(&left, &right).expect("int equality defined");
        let ord = compare_order(&left, &right).expect("int ordering defined");

        prop_assert_eq!(eq, ord == Ordering::Equal);
    }

    #[test]
    fn widened_comparison_is_symmetric(a in any::<i64>(), b in any::<u64>()) {
        let eq_lr = compare_eq(&Value::Int(a), &Value::Uint(b));
        let eq_rl = compare_eq(&Value::Uint(b), &Value::Int(a));

        prop_assert_eq!(eq_lr, eq_rl);
    }
}
