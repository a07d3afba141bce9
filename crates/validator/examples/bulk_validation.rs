//! Bulk validation of a keyed record with datatype-validator.
//!
//! Run: `cargo run -p datatype-validator --example bulk_validation`

use datatype_validator::prelude::*;
use serde_json::json;

fn main() {
    predicates();
    assertions();
    bulk_validation();
    json_records();
}

/// The same values under both strategies.
fn predicates() {
    println!("=== Predicates ===\n");

    let strict = Validator::strict();
    let fuzzy = Validator::fuzzy();

    for value in [Value::from("1"), Value::Float(1.0), Value::from("true"), Value::Null] {
        println!(
            "{:<8} strict int: {:<5} fuzzy int: {:<5} fuzzy bool: {}",
            format!("{value:?}").chars().take(8).collect::<String>(),
            strict.is_int(&value),
            fuzzy.is_int(&value),
            fuzzy.is_bool(&value),
        );
    }

    println!();
}

fn assertions() {
    println!("=== Assertions ===\n");

    let strict = Validator::strict();
    let checks = [
        (Value::from("22"), "int"),
        (Value::list([1, 2, 3]), "string"),
        (Value::from(Object::named("chrono::DateTime")), "DateTime"),
        (Value::from(Object::named("chrono::DateTime")), "time::DateTime"),
    ];

    for (value, descriptor) in &checks {
        match strict.assert_is_type(value, descriptor) {
            Ok(()) => println!("✓ {descriptor}"),
            Err(e) => println!("✗ {e}"),
        }
    }

    println!();
}

fn bulk_validation() {
    println!("=== Bulk Validation ===\n");

    let rules = array! {
        "name" => "string",
        "age" => "int",
        "birthday" => "DateTime",
        "lucky" => "int[]",
        "email" => "?string",
    };
    let values = array! {
        "name" => "Cheyenne",
        "age" => "22",
        "birthday" => "1996-12-04",
        "lucky" => list![7, "two", 1],
    };

    for validator in [Validator::new(ValidationType::Strict), Validator::new(ValidationType::Fuzzy)] {
        println!("{}:", validator.validation_type());
        report(&validator.validate(&values, &rules));
    }

    println!();
}

/// Records arriving as JSON are converted first.
fn json_records() {
    println!("=== JSON Records ===\n");

    let config = match ValidatorConfig::from_json(r#"{ "validation_type": "fuzzy" }"#) {
        Ok(config) => config,
        Err(e) => {
            println!("bad config: {e}");
            return;
        }
    };
    let validator = config.build();

    let record = json!({ "port": "8080", "debug": "1", "hosts": ["a", "b"] });
    let rules = array! { "port" => "int", "debug" => "bool", "hosts" => "string[]", "timeout" => "null|float" };

    let Value::Array(values) = Value::from(record) else {
        return;
    };
    report(&validator.validate(&values, &rules));
}

fn report(result: &Result<bool, ValidateError>) {
    match result {
        Ok(_) => println!("  ✓ all fields valid"),
        Err(ValidateError::Invalid(failed)) => {
            println!("  ✗ {failed}");
            for reason in failed.reasons().values() {
                println!("    - {reason}");
            }
        }
        Err(ValidateError::Logic(e)) => println!("  ! {e}"),
    }
}
