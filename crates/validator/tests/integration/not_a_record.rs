use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use rstest::rstest;
use tagcheck::{Error, Inspect, Record, ValueKind, validate};

#[derive(Record)]
struct Plain {
    #[validate("non-empty:3")]
    pub name: String,
}

fn assert_not_a_record<T: Inspect + ?Sized>(value: &T, found: ValueKind) {
    assert_eq!(validate(value), Err(Error::NotARecord { found }));
}

#[rstest]
#[case::text("some string", ValueKind::Text)]
#[case::empty_text("", ValueKind::Text)]
fn text_is_not_a_record(#[case] value: &str, #[case] found: ValueKind) {
    assert_not_a_record(value, found);
}

#[test]
fn primitives_are_not_records() {
    assert_not_a_record(&42_i32, ValueKind::Integer);
    assert_not_a_record(&u64::MAX, ValueKind::Integer);
    assert_not_a_record(&1.5_f64, ValueKind::Float);
    assert_not_a_record(&false, ValueKind::Bool);
    assert_not_a_record(&'c', ValueKind::Char);
    assert_not_a_record(&(), ValueKind::Null);
}

#[test]
fn maps_are_not_records() {
    assert_not_a_record(&HashMap::<String, String>::new(), ValueKind::Map);

    let mut map = BTreeMap::new();
    map.insert("name", "");
    assert_not_a_record(&map, ValueKind::Map);
}

#[test]
fn sequences_are_not_records() {
    assert_not_a_record(&vec![Plain { name: String::new() }], ValueKind::Sequence);
    assert_not_a_record(&[1, 2, 3], ValueKind::Sequence);
}

#[test]
fn indirection_to_non_record_is_not_a_record() {
    assert_not_a_record(&Box::new(5_u8), ValueKind::Integer);
    assert_not_a_record(&Rc::new(String::from("x")), ValueKind::Text);
    assert_not_a_record(&Option::<Plain>::None, ValueKind::Null);
    assert_not_a_record(&Box::new(Option::<i32>::None), ValueKind::Null);
}

#[test]
fn indirection_to_record_is_a_record() {
    let plain = Plain { name: "abc".into() };
    assert!(validate(&Box::new(&plain)).is_ok());
    assert!(validate(&Some(Rc::new(plain))).is_ok());

    let bad = Plain { name: String::new() };
    let err = validate(&&&bad).unwrap_err();
    assert!(!err.is_not_a_record());
}

#[cfg(feature = "serde")]
#[test]
fn json_values_are_not_records() {
    let object = serde_json::json!({ "name": "" });
    assert_not_a_record(&object, ValueKind::Map);
    assert_not_a_record(&serde_json::json!(null), ValueKind::Null);
    assert_not_a_record(&serde_json::json!([1]), ValueKind::Sequence);
}

#[test]
fn not_a_record_message() {
    let err = validate(&7_i8).unwrap_err();
    assert!(err.is_not_a_record());
    assert!(err.validation_errors().is_none());
    assert_eq!(err.to_string(), "value is not a record (found integer)");
}
