//! Property tests pinning the container laws:
//! - construction succeeds iff every element satisfies the descriptor,
//!   failing at the first offending position otherwise
//! - set() on an occupied slot appends instead of overwriting, and
//!   rejects values the descriptor refuses
//! - JSON text decodes back to the structured form

use dataclass::{
    Access, Error, JsonOptions, ToJson, ToStructured, TypeSpec, TypedCollection,
    ValidatedScalar, Value,
};
use proptest::prelude::*;

fn plain_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>()
            .prop_filter("JSON cannot carry non-finite floats", |f| f.is_finite())
            .prop_map(Value::Float),
        any::<String>().prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((any::<String>(), inner), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

fn int_or_string() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<String>().prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn construction_succeeds_iff_all_elements_are_ints(
        xs in prop::collection::vec(int_or_string(), 0..16)
    ) {
        let first_bad = xs.iter().position(|v| !v.is_int());
        let result = TypedCollection::new(xs.clone(), TypeSpec::name("int"));

        match (first_bad, result) {
            (None, Ok(collection)) => prop_assert_eq!(collection.len(), xs.len()),
            (Some(expected), Err(Error::TypeMismatch { position, .. })) => {
                prop_assert_eq!(position, expected)
            }
            (None, Err(err)) => prop_assert!(false, "unexpected failure: {err}"),
            (Some(_), Ok(_)) => prop_assert!(false, "invalid element accepted"),
            (Some(_), Err(err)) => prop_assert!(false, "wrong error: {err}"),
        }
    }

    #[test]
    fn set_on_occupied_slot_appends_and_preserves_it(
        xs in prop::collection::vec(any::<i64>(), 1..12),
        index_seed in any::<prop::sample::Index>(),
        fresh in any::<i64>(),
    ) {
        let index = index_seed.index(xs.len());
        let mut collection =
            TypedCollection::new(xs.iter().copied().map(Value::Int), TypeSpec::name("int"))
                .unwrap();

        collection.set(index, Value::Int(fresh)).unwrap();

        prop_assert_eq!(collection.len(), xs.len() + 1);
        prop_assert_eq!(collection.get(index), Some(&Value::Int(xs[index])));
        prop_assert_eq!(collection.get(xs.len()), Some(&Value::Int(fresh)));
    }

    #[test]
    fn set_rejects_what_the_descriptor_rejects(
        xs in prop::collection::vec(any::<i64>(), 1..8),
        intruder in any::<String>(),
    ) {
        let mut collection =
            TypedCollection::new(xs.iter().copied().map(Value::Int), TypeSpec::name("int"))
                .unwrap();
        let before = collection.to_structured();

        let result = collection.set(0, Value::String(intruder));

        prop_assert!(
            matches!(result, Err(Error::TypeMismatch { .. })),
            "expected Err(Error::TypeMismatch)"
        );
        prop_assert_eq!(collection.to_structured(), before);
    }

    #[test]
    fn unset_of_an_occupied_slot_shrinks_by_one(
        xs in prop::collection::vec(any::<i64>(), 1..12),
        index_seed in any::<prop::sample::Index>(),
    ) {
        let index = index_seed.index(xs.len());
        let mut collection =
            TypedCollection::new(xs.iter().copied().map(Value::Int), TypeSpec::name("int"))
                .unwrap();

        collection.unset(index).unwrap();

        prop_assert_eq!(collection.len(), xs.len() - 1);
        prop_assert!(!collection.has(index));
    }

    #[test]
    fn json_text_decodes_to_the_structured_form(
        xs in prop::collection::vec(plain_value(), 0..8)
    ) {
        let collection =
            TypedCollection::new(xs, TypeSpec::predicate(|_| true)).unwrap();

        let text = collection.to_json(JsonOptions::NONE).unwrap();
        let decoded = Value::from(serde_json::from_str::<serde_json::Value>(&text).unwrap());

        prop_assert_eq!(decoded, collection.to_structured());
    }

    #[test]
    fn scalar_stores_accepted_values_exactly(value in plain_value()) {
        let scalar = ValidatedScalar::<dataclass::AlwaysValid>::new(value.clone()).unwrap();
        prop_assert_eq!(scalar.value(), &value);
    }
}
