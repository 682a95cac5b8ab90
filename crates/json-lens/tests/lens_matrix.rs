mod common;

use common::{cart, cart_with, foo_book, pocket_book};
use json_lens::builders::{jarray, jnumber, jobject, jpair, jstring};
use json_lens::{
    get_path, get_path_array, get_path_bool, get_path_number, get_path_string, parse_value,
    path_lens, update_path, LensExt, Value, ValueLens,
};

fn plus_ten(v: Option<Value>) -> Option<Value> {
    v.and_then(|v| v.as_number()).map(|n| jnumber(n + 10.0))
}

#[test]
fn lens_get_path_matrix() {
    let doc = cart();
    assert_eq!(get_path_string(&doc, "items/0/price").as_deref(), Some("$10.00"));
    assert_eq!(get_path_number(&doc, "items/0/price"), None);
    assert_eq!(get_path_bool(&doc, "items/0/price"), None);
    assert!(get_path_array(&doc, "items/0/price").is_none());
    assert_eq!(get_path_string(&doc, "items/1/price").as_deref(), Some("$5.50"));
    assert_eq!(get_path_number(&doc, "itemCount"), Some(2.0));
    assert_eq!(get_path_array(&doc, "items").map(|a| a.len()), Some(2));

    let absent = ["items/2/price", "items/green/price", "items/1/green", "itemCount/1", "items/-1"];
    for path in absent {
        assert_eq!(get_path(&doc, path), None, "{path}");
    }
}

#[test]
fn lens_update_path_scenario() {
    let doc = parse_value(r#"{"itemCount":2,"items":[{"qty":1},{"qty":2}]}"#).unwrap();
    let expected = parse_value(r#"{"itemCount":2,"items":[{"qty":11},{"qty":2}]}"#);
    assert_eq!(update_path(&doc, "items/0/qty", plus_ten), expected);
}

#[test]
fn lens_update_both_quantities() {
    let once = update_path(&cart(), "items/0/qty", plus_ten).unwrap();
    let twice = update_path(&once, "items/1/qty", plus_ten).unwrap();
    assert_eq!(twice, cart_with(vec![foo_book(11), pocket_book(12)]));
    // the source document is untouched
    assert_eq!(get_path_number(&cart(), "items/0/qty"), Some(1.0));
}

#[test]
fn lens_bogus_array_index_is_noop() {
    let doc = cart();
    assert_eq!(get_path(&doc, "items/zero/qty"), None);
    assert_eq!(update_path(&doc, "items/zero/qty", |_| Some(jnumber(300.0))), Some(doc));
}

#[test]
fn lens_update_new_depth_then_remove() {
    let basics = jobject([jpair("itemCount", 2), jpair("subtotal", "$15.50")]);
    let deep = update_path(&basics, "a/b/c/d", |_| Some(jstring("Hello!"))).unwrap();
    let expected = jobject([
        jpair("itemCount", 2),
        jpair("subtotal", "$15.50"),
        jpair("a", jobject([jpair("b", jobject([jpair("c", jobject([jpair("d", "Hello!")]))]))])),
    ]);
    assert_eq!(deep, expected);
    assert_eq!(update_path(&expected, "a", |_| None), Some(basics));
}

#[test]
fn lens_missing_key_passes_none() {
    let updated = update_path(&jobject([jpair("name", "Alice")]), "age", |old| {
        assert!(old.is_none());
        Some(jnumber(10.0))
    });
    assert_eq!(updated, Some(jobject([jpair("name", "Alice"), jpair("age", 10)])));
}

#[test]
fn lens_value_methods_matrix() {
    let qty: ValueLens = path_lens("items/1/qty");
    let plus = cart_with(vec![foo_book(11), pocket_book(12)]);
    let target = cart_with(vec![foo_book(11), pocket_book(10)]);

    assert_eq!(plus.lens_get(&qty), Some(jnumber(12.0)));
    assert_eq!(target.lens_get(&qty), Some(jnumber(10.0)));
    assert_eq!(cart_with(vec![foo_book(11)]).lens_get(&qty), None);
    assert_eq!(plus.lens_set(&qty, Some(jnumber(10.0))), Some(target.clone()));
    assert_eq!(plus.lens_update(&qty, |_| Some(jnumber(10.0))), Some(target));
}

#[test]
fn lens_object_delete_and_edit() {
    let plus = jobject([
        jpair("title", "Javascript Pocket Reference"),
        jpair("edition", "limited platinum"),
        jpair("qty", 1),
    ]);
    let expected = jobject([jpair("title", "Javascript Pocket Reference"), jpair("qty", 12)]);
    let edited = plus
        .lens_set(&path_lens("edition"), None)
        .and_then(|v| v.lens_set(&path_lens("qty"), Some(jnumber(12.0))));
    assert_eq!(edited, Some(expected));
}

#[test]
fn lens_array_delete_matrix() {
    let plus = cart_with(vec![foo_book(11), pocket_book(12)]);
    assert_eq!(
        plus.lens_set(&path_lens("items/1"), None),
        Some(cart_with(vec![foo_book(11)]))
    );

    let names = jarray(["Alice", "Bob", "Charlie"].map(jstring));
    assert_eq!(
        names.lens_set(&path_lens("0"), None),
        Some(jarray(["Bob", "Charlie"].map(jstring)))
    );
    assert_eq!(names.lens_set(&path_lens("3"), None), Some(names.clone()));
}

#[test]
fn lens_segment_form_reaches_slash_keys() {
    let doc = jobject([jpair("a/b", jobject([jpair("c", true)]))]);
    assert_eq!(get_path(&doc, ["a/b", "c"]), Some(Value::TRUE));
    assert_eq!(get_path(&doc, "a/b/c"), None);
    let updated = update_path(&doc, ["a/b", "c"], |_| Some(Value::FALSE)).unwrap();
    assert_eq!(get_path_bool(&updated, ["a/b", "c"]), Some(false));
}

#[test]
fn lens_scalar_parent_is_noop() {
    let doc = cart();
    assert_eq!(update_path(&doc, "itemCount/x", |_| Some(Value::NULL)), Some(doc.clone()));
    assert_eq!(update_path(&doc, "subtotal/0", |_| None), Some(doc));
}

#[test]
fn lens_matches_serde_json_pointer_reads() {
    let doc = serde_json::json!({"a": {"b": [10, {"c": "x"}]}});
    let value = Value::try_from(doc.clone()).unwrap();
    for (path, pointer) in [("a/b/0", "/a/b/0"), ("a/b/1/c", "/a/b/1/c"), ("a/z", "/a/z")] {
        let ours = get_path(&value, path).map(serde_json::Value::from);
        assert_eq!(ours.as_ref(), doc.pointer(pointer), "{path}");
    }
}
