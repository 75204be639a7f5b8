pub mod json;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::grade::Grade;
use crate::model::scores::{EvaluationSource, RubricScores};
use crate::pipeline::stage5_overall::BreakdownRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Evaluated,
    NoEvaluationData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackEntry {
    pub score_text: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub tool: String,
    pub tool_version: String,
    pub rubric: String,
    pub status: ReportStatus,
    pub source: Option<EvaluationSource>,
    /// Rubric categories only.
    pub scores: RubricScores,
    /// Normalized values under keys the rubric does not define.
    pub extra_scores: RubricScores,
    pub overall: Option<f64>,
    pub grade: Option<Grade>,
    pub breakdown: Vec<BreakdownRow>,
    pub missing_categories: Vec<String>,
    pub feedback: BTreeMap<String, FeedbackEntry>,
    pub coaching_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipsReport {
    pub overall: Option<f64>,
    pub tips: Vec<String>,
}
