use serde_json::{Map, Number, Value};

use crate::model::payload::EvaluationPayload;
use crate::model::rubric::Rubric;
use crate::model::scores::{AdditionalData, EvaluationSource, StructuredEvaluation};
use crate::pipeline::patterns::{RubricPatterns, SCORE_OUT_OF_TEN};
use crate::pipeline::stage1_payload::{DecodedPayload, run_stage1};
use crate::pipeline::stage3_normalize::normalize;

pub const EVALUATION_SCORE_FIELD: &str = "evaluation_score";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLayer {
    TextPatterns,
    EmbeddedJson,
    EvaluationScoreField,
    /// Missing categories count as 0 once any category key is present.
    TopLevelCategories,
}

/// Merge order. A later layer overwrites an earlier one key by key.
pub const SCORE_LAYER_PRECEDENCE: [ScoreLayer; 4] = [
    ScoreLayer::TextPatterns,
    ScoreLayer::EmbeddedJson,
    ScoreLayer::EvaluationScoreField,
    ScoreLayer::TopLevelCategories,
];

pub fn run_stage2(
    payload: &EvaluationPayload,
    rubric: &Rubric,
    patterns: &RubricPatterns,
) -> Option<StructuredEvaluation> {
    let decoded = run_stage1(payload);
    let merged = merge_layers(&decoded, rubric, patterns);

    if merged.is_empty() && !SCORE_OUT_OF_TEN.is_match(&decoded.scan_text) {
        tracing::debug!("no scores and no N/10 marker; payload carries no evaluation");
        return None;
    }

    Some(StructuredEvaluation {
        scores: normalize(&merged),
        source: EvaluationSource::ParsedPayload,
        additional_data: AdditionalData {
            detailed_feedback: decoded.scan_text,
            coaching_tips: Vec::new(),
        },
    })
}

pub fn merge_layers(
    decoded: &DecodedPayload,
    rubric: &Rubric,
    patterns: &RubricPatterns,
) -> Map<String, Value> {
    let mut merged = Map::new();
    for layer in SCORE_LAYER_PRECEDENCE {
        if let Some(scores) = collect_layer(layer, decoded, rubric, patterns) {
            tracing::trace!(?layer, keys = scores.len(), "merging score layer");
            merged.extend(scores);
        }
    }
    merged
}

pub fn collect_layer(
    layer: ScoreLayer,
    decoded: &DecodedPayload,
    rubric: &Rubric,
    patterns: &RubricPatterns,
) -> Option<Map<String, Value>> {
    match layer {
        ScoreLayer::TextPatterns => non_empty(text_pattern_scores(&decoded.scan_text, patterns)),
        ScoreLayer::EmbeddedJson => {
            if !decoded.scan_is_authored() {
                return None;
            }
            embedded_json_scores(&decoded.scan_text, patterns)
        }
        ScoreLayer::EvaluationScoreField => decoded
            .structured
            .as_ref()?
            .get(EVALUATION_SCORE_FIELD)?
            .as_object()
            .cloned(),
        ScoreLayer::TopLevelCategories => {
            top_level_category_scores(decoded.structured.as_ref()?, rubric)
        }
    }
}

fn text_pattern_scores(text: &str, patterns: &RubricPatterns) -> Map<String, Value> {
    let mut scores = Map::new();
    for (key, regex) in &patterns.label_scores {
        let Some(number) = regex.captures(text).and_then(|caps| caps.name("score")) else {
            continue;
        };
        match number.as_str().parse::<f64>() {
            Ok(value) => {
                // Absurdly long digit runs overflow to infinity; keep them huge.
                let value = value.min(f64::MAX);
                if let Some(n) = Number::from_f64(value) {
                    scores.insert(key.clone(), Value::Number(n));
                }
            }
            Err(err) => {
                tracing::debug!(key = %key, error = %err, "unparseable score in text");
            }
        }
    }
    scores
}

fn embedded_json_scores(text: &str, patterns: &RubricPatterns) -> Option<Map<String, Value>> {
    let fragment = patterns.fragment.find(text)?;
    match serde_json::from_str::<Value>(fragment.as_str()) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(error = %err, "embedded score fragment is not valid JSON");
            None
        }
    }
}

fn top_level_category_scores(map: &Map<String, Value>, rubric: &Rubric) -> Option<Map<String, Value>> {
    if !rubric.keys().any(|key| map.contains_key(key)) {
        return None;
    }
    Some(
        rubric
            .keys()
            .map(|key| {
                let value = map.get(key).cloned().unwrap_or_else(|| Value::from(0));
                (key.to_string(), value)
            })
            .collect(),
    )
}

fn non_empty(map: Map<String, Value>) -> Option<Map<String, Value>> {
    if map.is_empty() { None } else { Some(map) }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_extract.rs"]
mod tests;
