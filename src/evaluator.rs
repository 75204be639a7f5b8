use once_cell::sync::Lazy;

use crate::error::Result;
use crate::model::feedback::{CategoryFeedbackMap, FeedbackOverall};
use crate::model::payload::EvaluationPayload;
use crate::model::rubric::Rubric;
use crate::model::scores::{RubricScores, StructuredEvaluation};
use crate::pipeline::patterns::RubricPatterns;
use crate::pipeline::stage2_extract::run_stage2;
use crate::pipeline::stage4_feedback::run_stage4;
use crate::pipeline::stage5_overall::{ScoreBreakdown, overall_score, run_stage5};
use crate::pipeline::stage6_tips::run_stage6;

static BUILTIN: Lazy<Evaluator> = Lazy::new(|| {
    Evaluator::new(Rubric::call_training_v1()).expect("built-in rubric compiles")
});

/// A rubric together with its compiled patterns. Immutable and `Sync`, so one
/// instance can serve any number of callers.
#[derive(Debug, Clone)]
pub struct Evaluator {
    rubric: Rubric,
    patterns: RubricPatterns,
}

impl Evaluator {
    pub fn new(rubric: Rubric) -> Result<Self> {
        rubric.validate()?;
        let patterns = RubricPatterns::compile(&rubric)?;
        Ok(Self { rubric, patterns })
    }

    /// Shared instance for `Rubric::call_training_v1`.
    pub fn builtin() -> &'static Evaluator {
        &BUILTIN
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn extract(&self, payload: &EvaluationPayload) -> Option<StructuredEvaluation> {
        run_stage2(payload, &self.rubric, &self.patterns)
    }

    pub fn parse_feedback(&self, text: &str) -> (CategoryFeedbackMap, FeedbackOverall) {
        let out = run_stage4(text, &self.patterns);
        (out.categories, out.overall)
    }

    pub fn overall(&self, scores: &RubricScores) -> f64 {
        overall_score(scores, &self.rubric)
    }

    pub fn aggregate(&self, payload: &EvaluationPayload) -> (Option<f64>, Vec<String>) {
        let out = run_stage6(payload, &self.rubric, &self.patterns);
        (out.overall, out.tips)
    }

    pub fn breakdown(&self, scores: &RubricScores) -> ScoreBreakdown {
        run_stage5(scores, &self.rubric)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/evaluator.rs"]
mod tests;
