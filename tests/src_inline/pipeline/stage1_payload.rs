use super::*;
use serde_json::json;

#[test]
fn test_plain_text_is_scanned_as_is() {
    let payload = EvaluationPayload::from("Product Knowledge: 8/10");
    let decoded = run_stage1(&payload);
    assert!(decoded.structured.is_none());
    assert_eq!(decoded.scan_text, "Product Knowledge: 8/10");
    assert_eq!(decoded.scan_source, ScanSource::RawText);
}

#[test]
fn test_json_text_prefers_detailed_feedback() {
    let raw = json!({
        "detailed_feedback": "narrative",
        "Evaluation Score": "other",
        "evaluation": "third"
    })
    .to_string();
    let decoded = run_stage1(&EvaluationPayload::Text(raw));
    assert!(decoded.structured.is_some());
    assert_eq!(decoded.scan_text, "narrative");
    assert_eq!(decoded.scan_source, ScanSource::NarrativeField);
}

#[test]
fn test_field_order_skips_non_text_values() {
    let map = json!({
        "detailed_feedback": {"nested": true},
        "evaluation": "fallback narrative"
    });
    let decoded = run_stage1(&EvaluationPayload::from(map));
    assert_eq!(decoded.scan_text, "fallback narrative");
}

#[test]
fn test_evaluation_score_string_field_is_used() {
    let map = json!({"Evaluation Score": "Tone of Voice: 6/10"});
    let decoded = run_stage1(&EvaluationPayload::from(map));
    assert_eq!(decoded.scan_text, "Tone of Voice: 6/10");
}

#[test]
fn test_mapping_without_narrative_uses_whole_payload() {
    let map = json!({"product_knowledge": 7});
    let payload = EvaluationPayload::from(map);
    let decoded = run_stage1(&payload);
    assert_eq!(decoded.scan_text, r#"{"product_knowledge":7}"#);
    assert_eq!(decoded.scan_source, ScanSource::Serialized);
    assert!(!decoded.scan_is_authored());
}

#[test]
fn test_empty_narrative_falls_back_to_payload_text() {
    let raw = r#"{"detailed_feedback": "", "evaluation": "ignored"}"#.to_string();
    let decoded = run_stage1(&EvaluationPayload::Text(raw.clone()));
    assert_eq!(decoded.scan_text, raw);
    assert_eq!(decoded.scan_source, ScanSource::RawText);
    assert!(decoded.scan_is_authored());
}

#[test]
fn test_json_non_object_text_is_kept() {
    let decoded = run_stage1(&EvaluationPayload::from("[1, 2, 3]"));
    assert!(decoded.structured.is_none());
    assert_eq!(decoded.scan_text, "[1, 2, 3]");
}

#[test]
fn test_opaque_is_coerced_to_string() {
    let decoded = run_stage1(&EvaluationPayload::from(json!(42)));
    assert!(decoded.structured.is_none());
    assert_eq!(decoded.scan_text, "42");
    assert_eq!(decoded.scan_source, ScanSource::Serialized);
}
