//! Assertions: passing values return `Ok(())`, failing values name the
//! value and the expected descriptor.

use datatype_validator::prelude::*;
use pretty_assertions::assert_eq;

const DUMMY: &str = "datatype::tests::TestDummy";

fn dummy() -> Value {
    Value::from(Object::named(DUMMY))
}

fn another_dummy() -> Value {
    Value::from(Object::named("datatype::tests::AnotherDummy"))
}

fn memory_stream() -> Value {
    Value::from(Resource::stream(7))
}

fn assert_passes<C: TypeClassifier>(validator: &Validator<C>, values: &[Value], descriptor: &str) {
    for value in values {
        if let Err(e) = validator.assert_is_type(value, descriptor) {
            panic!("{value:?} should be a(n) {descriptor}: {e}");
        }
    }
}

fn assert_fails<C: TypeClassifier>(validator: &Validator<C>, values: &[Value], descriptor: &str) {
    for value in values {
        let result = validator.assert_is_type(value, descriptor);
        assert!(result.is_err(), "{value:?} should not be a(n) {descriptor}");
        if let Err(e) = result {
            assert_eq!(e.code(), TypeMismatch::CODE);
            assert_eq!(e.expected(), descriptor);
        }
    }
}

fn strings() -> Vec<Value> {
    ["hello", "", "0", "123", "true", "false", " "]
        .into_iter()
        .map(Value::from)
        .collect()
}

fn arrays() -> Vec<Value> {
    vec![
        list![],
        list![1, 2, 3],
        list!["a", "b"],
        Value::from(array! { 1 => "a", 2 => "b" }),
    ]
}

// ============================================================================
// STRICT
// ============================================================================

#[test]
fn strict_passes() {
    let strict = Validator::strict();
    assert_passes(&strict, &strings(), "string");
    assert_passes(&strict, &[Value::Int(123), Value::Int(-456), Value::Int(0)], "int");
    assert_passes(&strict, &[Value::Bool(true), Value::Bool(false)], "bool");
    assert_passes(&strict, &arrays(), "array");
    assert_passes(&strict, &[dummy()], DUMMY);
}

#[test]
fn strict_failures() {
    let strict = Validator::strict();
    let common = || {
        vec![
            Value::Null,
            list![],
            list![1, 2, 3],
            Value::from(Object::named("stdClass")),
            memory_stream(),
        ]
    };

    let mut not_strings = vec![Value::Int(123), Value::Float(1.23), Value::Bool(true), Value::Bool(false)];
    not_strings.extend(common());
    assert_fails(&strict, &not_strings, "string");

    let mut not_ints = vec![
        Value::from("123"),
        Value::from("abc"),
        Value::Float(1.23),
        Value::Bool(true),
        Value::Bool(false),
    ];
    not_ints.extend(common());
    assert_fails(&strict, &not_ints, "int");

    let mut not_bools = vec![Value::from("true"), Value::from("false"), Value::Int(0), Value::Int(1)];
    not_bools.extend(common());
    assert_fails(&strict, &not_bools, "bool");

    let not_arrays = [
        Value::from("not an array"),
        Value::Int(123),
        Value::Float(1.23),
        Value::Bool(true),
        Value::Bool(false),
        Value::Null,
        Value::from(Object::named("stdClass")),
        memory_stream(),
    ];
    assert_fails(&strict, &not_arrays, "array");

    let mut not_dummies = vec![another_dummy(), Value::from("not an object"), Value::Int(123), Value::Float(1.23)];
    not_dummies.extend(common());
    assert_fails(&strict, &not_dummies, DUMMY);
}

#[test]
fn named_assertions() {
    let strict = Validator::strict();

    assert_eq!(strict.assert_is_bool(&Value::Bool(true)), Ok(()));
    assert!(strict.assert_is_bool(&Value::from("1.1")).is_err());

    assert_eq!(strict.assert_is_int(&Value::Int(1)), Ok(()));
    assert!(strict.assert_is_int(&Value::from("1")).is_err());

    assert_eq!(strict.assert_is_float(&Value::Float(1.1)), Ok(()));
    assert!(strict.assert_is_float(&Value::from("1.1")).is_err());

    assert_eq!(strict.assert_is_string(&Value::from("1.1")), Ok(()));
    assert!(strict.assert_is_string(&Value::Float(1.1)).is_err());

    assert_eq!(strict.assert_is_array(&list![1.1]), Ok(()));
    assert!(strict.assert_is_array(&Value::Float(1.1)).is_err());

    assert_eq!(strict.assert_is_object(&Value::from(Object::named("stdClass"))), Ok(()));
    assert!(strict.assert_is_object(&list![]).is_err());

    assert_eq!(strict.assert_is_callable(&Value::from(Object::closure())), Ok(()));
    assert!(strict.assert_is_callable(&Value::from("1.1")).is_err());

    assert_eq!(strict.assert_is_resource(&memory_stream()), Ok(()));
    assert!(strict.assert_is_resource(&Value::from("1.1")).is_err());
}

#[test]
fn specific_objects_by_short_and_full_name() {
    let strict = Validator::strict();
    let me = Value::object_of::<Validator<StrictTypes>>();
    let full = std::any::type_name::<Validator<StrictTypes>>();

    assert_eq!(strict.assert_is_specific_object(&me, "Validator"), Ok(()));
    assert_eq!(strict.assert_is_specific_object(&me, full), Ok(()));
    assert!(strict.assert_is_specific_object(&me, "doesntnexist").is_err());
}

// ============================================================================
// FUZZY
// ============================================================================

#[test]
fn fuzzy_passes() {
    let fuzzy = Validator::fuzzy();
    assert_passes(&fuzzy, &strings(), "string");
    assert_passes(
        &fuzzy,
        &[
            Value::Int(123),
            Value::Int(-456),
            Value::Int(0),
            Value::from("123"),
            Value::from("-456"),
            Value::from("0"),
        ],
        "int",
    );
    assert_passes(
        &fuzzy,
        &[
            Value::Bool(true),
            Value::Bool(false),
            Value::Null,
            Value::Int(0),
            Value::Int(1),
            Value::from("0"),
            Value::from("1"),
            Value::from("true"),
            Value::from("false"),
            Value::Float(0.1),
            Value::Int(123),
        ],
        "bool",
    );
    assert_passes(&fuzzy, &arrays(), "array");
    assert_passes(&fuzzy, &[dummy()], "TestDummy");
    assert_passes(&fuzzy, &[dummy()], DUMMY);
}

#[test]
fn fuzzy_failures() {
    let fuzzy = Validator::fuzzy();
    let common = || {
        vec![
            Value::Bool(true),
            Value::Bool(false),
            Value::Null,
            list![],
            list![1, 2, 3],
            Value::from(Object::named("stdClass")),
            memory_stream(),
        ]
    };

    let mut not_strings = vec![Value::Int(123), Value::Float(1.23)];
    not_strings.extend(common());
    assert_fails(&fuzzy, &not_strings, "string");

    let mut not_ints = vec![Value::from("abc"), Value::Float(1.23), Value::Float(-1.23)];
    not_ints.extend(common());
    assert_fails(&fuzzy, &not_ints, "int");

    assert_fails(&fuzzy, &[Value::from(Object::named("stdClass")), memory_stream()], "bool");

    let not_arrays = [
        Value::from("not an array"),
        Value::Int(123),
        Value::Float(1.23),
        Value::Bool(true),
        Value::Bool(false),
        Value::Null,
        Value::from(Object::named("stdClass")),
        memory_stream(),
    ];
    assert_fails(&fuzzy, &not_arrays, "array");

    let not_objects = || {
        vec![
            Value::from("not an object"),
            Value::Int(123),
            Value::Float(1.23),
            Value::Null,
            list![],
            list![1, 2, 3],
            memory_stream(),
        ]
    };
    let mut not_dummies = not_objects();
    not_dummies.push(another_dummy());
    assert_fails(&fuzzy, &not_dummies, "TestDummy");

    let mut not_specific = not_objects();
    not_specific.push(Value::from(Object::named("stdClass")));
    assert_fails(&fuzzy, &not_specific, DUMMY);
}

// ============================================================================
// MESSAGES
// ============================================================================

#[test]
fn failure_messages() {
    let strict = Validator::strict();
    let message = |value: Value, descriptor: &str| {
        strict
            .assert_is_type(&value, descriptor)
            .map_err(|e| e.to_string())
            .unwrap_err()
    };

    insta::assert_snapshot!(message(Value::from("22"), "int"), @"'22' is not an int.");
    insta::assert_snapshot!(message(Value::Float(1.5), "string"), @"'1.5' is not a string.");
    insta::assert_snapshot!(message(Value::Bool(true), "object"), @"'true' is not an object.");
    insta::assert_snapshot!(message(Value::Null, "int"), @"'null' is not an int.");
    insta::assert_snapshot!(
        message(list!["abcdef", "ghijkl", "mnopqr"], "string"),
        @r#"'["abcdef","ghij' is not a string."#
    );
    insta::assert_snapshot!(
        message(Value::from(array! { "a" => 1 }), "Carbon"),
        @r#"'{"a":1}' is not a Carbon."#
    );
    insta::assert_snapshot!(message(memory_stream(), "int"), @"'' is not an int.");
    insta::assert_snapshot!(message(Value::Int(5), "Éclair"), @"'5' is not a Éclair.");
}
