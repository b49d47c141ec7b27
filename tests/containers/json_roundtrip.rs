//! JSON text from `to_json` must decode back to exactly the structure
//! `to_structured` reports.

use dataclass::{
    Access, FieldSpec, JsonOptions, Record, Schema, ToJson, ToStructured, TypeSpec,
    TypedCollection, Value,
};

static PROFILE: Schema = Schema {
    name: "Profile",
    read_only: false,
    fields: &[
        FieldSpec { name: "handle", setter: None },
        FieldSpec { name: "score", setter: None },
        FieldSpec { name: "tags", setter: None },
    ],
};

fn decode(text: &str) -> Value {
    let decoded: serde_json::Value = serde_json::from_str(text).unwrap();
    Value::from(decoded)
}

#[test]
fn collection_roundtrip_compact() {
    let collection = TypedCollection::new(
        ["a", "b", "c"].map(Value::from),
        TypeSpec::name("string"),
    )
    .unwrap();

    let text = collection.to_json(JsonOptions::NONE).unwrap();
    assert_eq!(decode(&text), collection.to_structured());
}

#[test]
fn collection_roundtrip_pretty_is_same_structure() {
    let collection =
        TypedCollection::new([Value::Int(1), Value::Int(2)], TypeSpec::name("int")).unwrap();

    let compact = collection.to_json(JsonOptions::NONE).unwrap();
    let pretty = collection.to_json(JsonOptions::PRETTY).unwrap();
    assert_ne!(compact, pretty, "pretty output is formatted differently");
    assert_eq!(decode(&compact), decode(&pretty));
}

#[test]
fn record_roundtrip_with_mixed_field_types() {
    let record = Record::new(
        &PROFILE,
        [
            ("handle", Value::from("ada")),
            ("score", Value::Float(9.5)),
            (
                "tags",
                Value::Array(vec![Value::from("x"), Value::from("y")]),
            ),
        ],
    )
    .unwrap();

    let text = record.to_json(JsonOptions::NONE).unwrap();
    assert_eq!(decode(&text), record.to_structured());
}

#[test]
fn roundtrip_survives_sparse_collection_positions() {
    let mut collection =
        TypedCollection::new([Value::Int(1), Value::Int(2)], TypeSpec::name("int")).unwrap();
    collection.unset(0).unwrap();
    collection.set(9, Value::Int(3)).unwrap();

    let text = collection.to_json(JsonOptions::NONE).unwrap();
    // Output is a dense sequence regardless of internal slot numbering.
    assert_eq!(text, "[2,3]");
    assert_eq!(decode(&text), collection.to_structured());
}

#[test]
fn unfilled_record_fields_encode_as_null() {
    let record = Record::new(&PROFILE, [("handle", Value::from("ada"))]).unwrap();
    let text = record.to_json(JsonOptions::NONE).unwrap();
    assert_eq!(text, r#"{"handle":"ada","score":null,"tags":null}"#);
    assert_eq!(decode(&text), record.to_structured());
}
