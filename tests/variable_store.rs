//! Integration tests for the two-tier template variable store

use pretty_assertions::assert_eq;
use serde_json::json;

use dialog_view::{Scope, VariableMap, VariableStore};

fn map(value: serde_json::Value) -> VariableMap {
    match value {
        serde_json::Value::Object(m) => m.into_iter().collect(),
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_set_several_values_at_once() {
    let mut store = VariableStore::new();
    store.set_values(
        map(json!({
            "twenty-three": "23",
            "eighty-nine": 89,
            "an_array": {"key": 2389},
            "an_object": {"key": 89},
            "a_null_value": null,
        })),
        Scope::Scoped,
    );

    assert_eq!(store.get("twenty-three"), Some(&json!("23")));
    assert_eq!(store.get("eighty-nine"), Some(&json!(89)));
    assert_eq!(store.get("an_array"), Some(&json!({"key": 2389})));
    assert_eq!(store.get("an_object"), Some(&json!({"key": 89})));
    assert_eq!(store.get("a_null_value"), Some(&json!(null)));
    assert_eq!(store.get("never-set"), None);
}

#[test]
fn test_scoped_values_do_not_override_persistent() {
    let mut store = VariableStore::new();
    let persistent = map(json!({"twenty-three": "23", "eighty-nine": 89}));

    store.set_values(persistent.clone(), Scope::Persistent);

    assert_eq!(store.persistent(), &persistent);
    assert_eq!(store.scoped(), &VariableMap::new());
    assert_eq!(store.merged(), persistent);

    let scoped = map(json!({"eighty-nine": 2389, "another_var": "another_value"}));
    store.set_values(scoped.clone(), Scope::Scoped);

    assert_eq!(store.persistent(), &persistent);
    assert_eq!(store.scoped(), &scoped);
    assert_eq!(
        store.merged(),
        map(json!({
            "twenty-three": "23",
            "eighty-nine": 2389,
            "another_var": "another_value",
        }))
    );
}

#[test]
fn test_merged_view_of_both_tiers() {
    let mut store = VariableStore::new();
    store.set_values(map(json!({"a": 1, "b": 2})), Scope::Persistent);
    store.set_values(map(json!({"b": 3, "c": 4})), Scope::Scoped);

    assert_eq!(store.merged(), map(json!({"a": 1, "b": 3, "c": 4})));
    assert_eq!(store.get("b"), Some(&json!(3)));
    assert_eq!(store.persistent(), &map(json!({"a": 1, "b": 2})));
}

#[test]
fn test_scoped_last_write_wins() {
    let mut store = VariableStore::new();
    store.set_values(map(json!({"k": "first"})), Scope::Scoped);
    store.set_values(map(json!({"k": "second"})), Scope::Scoped);

    assert_eq!(store.scoped(), &map(json!({"k": "second"})));
}
