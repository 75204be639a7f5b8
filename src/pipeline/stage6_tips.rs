use std::collections::HashSet;

use crate::model::payload::EvaluationPayload;
use crate::model::rubric::Rubric;
use crate::model::scores::StructuredEvaluation;
use crate::pipeline::patterns::RubricPatterns;
use crate::pipeline::stage2_extract::run_stage2;
use crate::pipeline::stage4_feedback::extract_coaching_tips;
use crate::pipeline::stage5_overall::overall_score;

#[derive(Debug, Clone, PartialEq)]
pub struct Stage6Output {
    pub overall: Option<f64>,
    pub tips: Vec<String>,
}

pub fn run_stage6(
    payload: &EvaluationPayload,
    rubric: &Rubric,
    patterns: &RubricPatterns,
) -> Stage6Output {
    let Some(evaluation) = run_stage2(payload, rubric, patterns) else {
        return Stage6Output {
            overall: None,
            tips: Vec::new(),
        };
    };

    let overall = if evaluation.scores.is_empty() {
        None
    } else {
        Some(overall_score(&evaluation.scores, rubric))
    };

    Stage6Output {
        overall,
        tips: evaluation_tips(&evaluation),
    }
}

/// Carried tips when present, else tips parsed from the detailed feedback.
pub fn evaluation_tips(evaluation: &StructuredEvaluation) -> Vec<String> {
    let additional = &evaluation.additional_data;
    if !additional.coaching_tips.is_empty() {
        dedup_tips(&additional.coaching_tips)
    } else if !additional.detailed_feedback.is_empty() {
        dedup_tips(&extract_coaching_tips(&additional.detailed_feedback))
    } else {
        Vec::new()
    }
}

/// Exact match after trimming; case is significant. First occurrence wins.
pub fn dedup_tips(candidates: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(candidates.len());
    for tip in candidates {
        let trimmed = tip.trim();
        if trimmed.is_empty() || !seen.insert(trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_tips.rs"]
mod tests;
