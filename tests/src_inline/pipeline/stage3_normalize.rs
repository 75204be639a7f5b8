use super::*;
use serde_json::json;

fn raw(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_rescale_and_clamp() {
    let out = normalize(&raw(json!({"a": 12, "b": 150, "c": -3, "d": 7.5, "e": 100, "f": 10})));
    assert!((out["a"] - 1.2).abs() < 1e-12);
    assert_eq!(out["b"], 10.0);
    assert_eq!(out["c"], 0.0);
    assert_eq!(out["d"], 7.5);
    assert_eq!(out["e"], 10.0);
    assert_eq!(out["f"], 10.0);
}

#[test]
fn test_non_numeric_values_are_dropped() {
    let out = normalize(&raw(json!({
        "s": "8",
        "b": true,
        "n": null,
        "l": [1],
        "o": {"x": 1},
        "ok": 4
    })));
    assert_eq!(out.len(), 1);
    assert_eq!(out["ok"], 4.0);
}

#[test]
fn test_unknown_keys_are_preserved() {
    let out = normalize(&raw(json!({"mystery": 3})));
    assert_eq!(out["mystery"], 3.0);
}

#[test]
fn test_output_always_in_range() {
    let samples = [
        f64::NEG_INFINITY,
        -1e300,
        -0.5,
        0.0,
        3.3,
        10.0,
        10.0001,
        42.0,
        100.0,
        100.5,
        1e300,
        f64::INFINITY,
    ];
    for v in samples {
        let out = normalize_value(v).unwrap();
        assert!((SCORE_MIN..=SCORE_MAX).contains(&out), "{v} -> {out}");
    }
    assert!(normalize_value(f64::NAN).is_none());
}
