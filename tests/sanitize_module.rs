use hook_event_logger::sanitize::{
    sanitize, truncate_text, SanitizeLimits, DEFAULT_MAX_ITEMS, DEFAULT_MAX_STRING_CHARS,
};
use serde_json::{json, Value};

#[test]
fn sanitize_module_exposes_default_limits() {
    assert_eq!(DEFAULT_MAX_STRING_CHARS, 2000);
    assert_eq!(DEFAULT_MAX_ITEMS, 50);
    assert_eq!(
        SanitizeLimits::default(),
        SanitizeLimits {
            max_string_chars: 2000,
            max_items: 50,
        }
    );
}

#[test]
fn scalars_pass_through_unchanged() {
    let limits = SanitizeLimits::default();
    for value in [json!(null), json!(true), json!(false), json!(42), json!(-3.5)] {
        assert_eq!(sanitize(&value, &limits), value);
    }
}

#[test]
fn strings_at_or_below_limit_are_identity() {
    let limits = SanitizeLimits::default();
    let exact = "x".repeat(2000);
    assert_eq!(sanitize(&json!(exact), &limits), json!(exact));
    assert_eq!(sanitize(&json!("short"), &limits), json!("short"));
    assert_eq!(sanitize(&json!(""), &limits), json!(""));
}

#[test]
fn long_strings_are_truncated_with_original_length_marker() {
    let limits = SanitizeLimits::default();
    let long = "a".repeat(2500);
    let Value::String(truncated) = sanitize(&json!(long), &limits) else {
        panic!("expected string");
    };
    assert!(truncated.starts_with(&"a".repeat(2000)));
    assert!(truncated.ends_with("... (2500 chars)"));
    assert_eq!(truncated, format!("{}... (2500 chars)", "a".repeat(2000)));
    assert_eq!(truncated.chars().count(), 2000 + "... (2500 chars)".len());
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let text = "日本".repeat(3);
    assert_eq!(truncate_text(&text, 4), "日本日本... (6 chars)");
    assert_eq!(truncate_text(&text, 6), text);
}

#[test]
fn short_arrays_keep_length_and_order() {
    let limits = SanitizeLimits::default();
    let items: Vec<Value> = (0..50).map(|n| json!(n)).collect();
    let value = Value::Array(items.clone());
    assert_eq!(sanitize(&value, &limits), Value::Array(items));
}

#[test]
fn long_arrays_keep_first_items_and_append_remaining_count() {
    let limits = SanitizeLimits::default();
    let value = Value::Array((0..73).map(|n| json!(n)).collect());

    let Value::Array(items) = sanitize(&value, &limits) else {
        panic!("expected array");
    };
    assert_eq!(items.len(), 51);
    assert_eq!(items[0], json!(0));
    assert_eq!(items[49], json!(49));
    assert_eq!(items[50], json!("... +23 more"));
}

#[test]
fn nested_values_use_the_same_bounds_at_every_depth() {
    let limits = SanitizeLimits {
        max_string_chars: 3,
        max_items: 2,
    };
    let value = json!({
        "outer": [
            {"inner": ["abcdef", "ab", "xyz", "more"]},
            [[1, 2, 3]],
            "dropped"
        ]
    });

    assert_eq!(
        sanitize(&value, &limits),
        json!({
            "outer": [
                {"inner": ["abc... (6 chars)", "ab", "... +2 more"]},
                [[1, 2, "... +1 more"]],
                "... +1 more"
            ]
        })
    );
}

#[test]
fn object_keys_keep_insertion_order_and_are_not_truncated() {
    let limits = SanitizeLimits {
        max_string_chars: 2,
        max_items: 50,
    };
    let value: Value =
        serde_json::from_str(r#"{"zeta": 1, "alpha": "long value", "middle_key_name": null}"#)
            .expect("parse");

    let sanitized = sanitize(&value, &limits);
    let keys: Vec<&str> = sanitized
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["zeta", "alpha", "middle_key_name"]);
    assert_eq!(sanitized["alpha"], json!("lo... (10 chars)"));
}

#[test]
fn sanitize_does_not_modify_its_input() {
    let limits = SanitizeLimits {
        max_string_chars: 1,
        max_items: 1,
    };
    let value = json!({"list": ["abc", "def"]});
    let before = value.clone();
    let _ = sanitize(&value, &limits);
    assert_eq!(value, before);
}

#[test]
fn numbers_outside_machine_range_are_unchanged() {
    let limits = SanitizeLimits::default();
    let value: Value =
        serde_json::from_str(r#"[123456789012345678901234567890, 1e400, -0.0]"#).expect("parse");
    let sanitized = sanitize(&value, &limits);
    assert_eq!(sanitized, value);
    assert_eq!(
        serde_json::to_string(&sanitized).expect("encode"),
        "[123456789012345678901234567890,1e400,-0.0]"
    );
}
