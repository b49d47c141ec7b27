//! Containers nested inside containers must materialize recursively:
//! structured output carries no wrapper values at any depth.

use dataclass::{
    FieldSpec, Record, Schema, ToStructured, TypeSpec, TypedCollection, Value,
};

static POINT: Schema = Schema {
    name: "Point",
    read_only: false,
    fields: &[
        FieldSpec { name: "x", setter: None },
        FieldSpec { name: "y", setter: None },
    ],
};

static PATH: Schema = Schema {
    name: "Path",
    read_only: false,
    fields: &[
        FieldSpec { name: "label", setter: None },
        FieldSpec { name: "points", setter: None },
    ],
};

fn point(x: i64, y: i64) -> Record {
    Record::new(&POINT, [("x", Value::Int(x)), ("y", Value::Int(y))]).unwrap()
}

/// Fails on any Collection or Record wrapper left in the output.
fn assert_plain(value: &Value) {
    match value {
        Value::Array(items) => items.iter().for_each(assert_plain),
        Value::Object(fields) => fields.values().for_each(assert_plain),
        Value::Collection(_) | Value::Record(_) => {
            panic!("residual wrapper in structured output: {value:?}")
        }
        _ => {}
    }
}

#[test]
fn collection_of_records_materializes() {
    let points = TypedCollection::new(
        [Value::from(point(0, 0)), Value::from(point(1, 2))],
        TypeSpec::instance(&POINT),
    )
    .unwrap();

    let structured = points.to_structured();
    assert_plain(&structured);

    let expected_first: Value = decode(r#"{"x": 0, "y": 0}"#);
    assert_eq!(structured.as_array().unwrap()[0], expected_first);
}

#[test]
fn record_holding_a_collection_materializes() {
    let points = TypedCollection::new(
        [Value::from(point(3, 4))],
        TypeSpec::instance(&POINT),
    )
    .unwrap();
    let path = Record::new(
        &PATH,
        [
            ("label", Value::from("diagonal")),
            ("points", Value::from(points)),
        ],
    )
    .unwrap();

    let structured = path.to_structured();
    assert_plain(&structured);
    assert_eq!(
        structured,
        decode(r#"{"label": "diagonal", "points": [{"x": 3, "y": 4}]}"#)
    );
}

#[test]
fn three_levels_of_nesting_materialize() {
    let inner = TypedCollection::new([Value::from(point(1, 1))], TypeSpec::instance(&POINT)).unwrap();
    let path = Record::new(&PATH, [("points", Value::from(inner))]).unwrap();
    let paths = TypedCollection::new(
        [Value::from(path)],
        TypeSpec::instance(&PATH),
    )
    .unwrap();

    assert_plain(&paths.to_structured());
}

#[test]
fn instance_spec_rejects_foreign_records() {
    let err = TypedCollection::new(
        [Value::from(point(0, 0)), Value::from(Record::empty(&PATH))],
        TypeSpec::instance(&POINT),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        dataclass::Error::TypeMismatch { position: 1, .. }
    ));
}

fn decode(text: &str) -> Value {
    Value::from(serde_json::from_str::<serde_json::Value>(text).unwrap())
}
