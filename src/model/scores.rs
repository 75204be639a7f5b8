use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category key to score. Values are in [0, 10] once normalized.
pub type RubricScores = BTreeMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationSource {
    ParsedPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalData {
    pub detailed_feedback: String,
    pub coaching_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredEvaluation {
    pub scores: RubricScores,
    pub source: EvaluationSource,
    pub additional_data: AdditionalData,
}
