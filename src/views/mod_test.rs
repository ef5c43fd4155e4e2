use super::*;
use serde_json::json;

fn payload(value: Value) -> Payload {
    value.as_object().cloned().unwrap()
}

// =============================================================================
// text_or
// =============================================================================

#[test]
fn text_or_reads_strings_verbatim() {
    let p = payload(json!({ "regime": "Risk-On" }));
    assert_eq!(text_or(&p, "regime", PLACEHOLDER), "Risk-On");
}

#[test]
fn text_or_stringifies_scalars() {
    let p = payload(json!({ "n": 42, "f": 1.5, "b": true }));
    assert_eq!(text_or(&p, "n", PLACEHOLDER), "42");
    assert_eq!(text_or(&p, "f", PLACEHOLDER), "1.5");
    assert_eq!(text_or(&p, "b", PLACEHOLDER), "true");
}

#[test]
fn text_or_defaults_missing_null_and_containers() {
    let p = payload(json!({ "null": null, "list": [1], "obj": {} }));
    assert_eq!(text_or(&p, "absent", PLACEHOLDER), "-");
    assert_eq!(text_or(&p, "null", PLACEHOLDER), "-");
    assert_eq!(text_or(&p, "list", "none"), "none");
    assert_eq!(text_or(&p, "obj", "none"), "none");
}

// =============================================================================
// number_or
// =============================================================================

#[test]
fn number_or_reads_numbers_and_numeric_strings() {
    let p = payload(json!({ "i": 72, "f": 6.5, "s": " 8 " }));
    assert!((number_or(&p, "i", 0.0) - 72.0).abs() < f64::EPSILON);
    assert!((number_or(&p, "f", 0.0) - 6.5).abs() < f64::EPSILON);
    assert!((number_or(&p, "s", 0.0) - 8.0).abs() < f64::EPSILON);
}

#[test]
fn number_or_defaults_on_garbage() {
    let p = payload(json!({ "word": "high", "nan": "NaN", "list": [1] }));
    assert!(number_or(&p, "word", 0.0).abs() < f64::EPSILON);
    assert!(number_or(&p, "nan", 0.0).abs() < f64::EPSILON);
    assert!(number_or(&p, "list", 0.0).abs() < f64::EPSILON);
    assert!((number_or(&p, "absent", 3.0) - 3.0).abs() < f64::EPSILON);
}

// =============================================================================
// lists and objects
// =============================================================================

#[test]
fn string_list_keeps_scalars_only() {
    let p = payload(json!({ "pros": ["Fast", 3, null, { "x": 1 }, "Cheap"] }));
    assert_eq!(string_list(&p, "pros"), vec!["Fast", "3", "Cheap"]);
}

#[test]
fn string_list_missing_or_wrong_type_is_empty() {
    let p = payload(json!({ "cons": "not a list" }));
    assert!(string_list(&p, "cons").is_empty());
    assert!(string_list(&p, "absent").is_empty());
}

#[test]
fn object_or_empty_falls_back() {
    let p = payload(json!({ "audit": { "a": 1 }, "bad": 5 }));
    assert_eq!(object_or_empty(&p, "audit")["a"], json!(1));
    assert!(object_or_empty(&p, "bad").is_empty());
    assert!(object_or_empty(&p, "absent").is_empty());
}

#[test]
fn object_list_skips_non_objects() {
    let p = payload(json!({ "items": [{ "name": "A" }, "stray", { "name": "B" }] }));
    let items = object_list(&p, "items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["name"], json!("B"));
}

// =============================================================================
// format_number
// =============================================================================

#[test]
fn format_number_drops_integral_fraction() {
    assert_eq!(format_number(72.0), "72");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(7.5), "7.5");
    assert_eq!(format_number(-3.0), "-3");
}
