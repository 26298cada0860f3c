use super::*;
use crate::animation::length::Length;

#[test]
fn fingerprint_is_stable_and_sensitive() {
    let names = vec!["a".to_owned(), "b".to_owned()];
    let v1 = [Value::Number(1.0), Value::Length(Length::vh(5.0))];
    let v2 = [Value::Number(1.0), Value::Length(Length::px(5.0))];
    assert_eq!(fingerprint_values(&names, &v1), fingerprint_values(&names, &v1));
    assert_ne!(fingerprint_values(&names, &v1), fingerprint_values(&names, &v2));

    let swapped = vec!["b".to_owned(), "a".to_owned()];
    assert_ne!(
        fingerprint_values(&names, &v1),
        fingerprint_values(&swapped, &v1)
    );
}

#[test]
fn signed_zero_hashes_equal() {
    let names = vec!["y".to_owned()];
    assert_eq!(
        fingerprint_values(&names, &[Value::Number(0.0)]),
        fingerprint_values(&names, &[Value::Number(-0.0)])
    );
}
