//! Turns a training-call evaluator's output into five rubric scores, a weighted
//! overall score and a deduplicated list of coaching tips.
//!
//! The payload may be narrative text, JSON embedded in text, or a partially
//! structured mapping. Nothing here fails on malformed input: a payload with
//! no usable signal yields `None`.

pub mod error;
pub mod evaluator;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

use serde_json::{Map, Value};

pub use error::{CallRubricError, Result};
pub use evaluator::Evaluator;
pub use model::category::{ScoreCategory, category_order};
pub use model::feedback::{CategoryFeedback, CategoryFeedbackMap, FeedbackOverall, Reasoning};
pub use model::grade::{Grade, Performance};
pub use model::payload::EvaluationPayload;
pub use model::rubric::{CategoryDef, Rubric};
pub use model::scores::{AdditionalData, EvaluationSource, RubricScores, StructuredEvaluation};
pub use pipeline::stage2_extract::{SCORE_LAYER_PRECEDENCE, ScoreLayer};
pub use pipeline::stage5_overall::{BreakdownRow, ScoreBreakdown};

/// Built-in rubric shortcuts.
pub fn extract(payload: &EvaluationPayload) -> Option<StructuredEvaluation> {
    Evaluator::builtin().extract(payload)
}

pub fn normalize(raw: &Map<String, Value>) -> RubricScores {
    pipeline::stage3_normalize::normalize(raw)
}

pub fn parse_detailed_feedback(text: &str) -> (CategoryFeedbackMap, FeedbackOverall) {
    Evaluator::builtin().parse_feedback(text)
}

pub fn overall_score(scores: &RubricScores) -> f64 {
    Evaluator::builtin().overall(scores)
}

pub fn aggregate_tips(payload: &EvaluationPayload) -> (Option<f64>, Vec<String>) {
    Evaluator::builtin().aggregate(payload)
}
