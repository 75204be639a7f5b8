use serde::{Deserialize, Serialize};

use crate::model::grade::{Grade, Performance, grade_for, performance_for};
use crate::model::rubric::Rubric;
use crate::model::scores::RubricScores;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub key: String,
    pub label: String,
    pub raw_score: f64,
    pub weight: f64,
    pub weighted_score: f64,
    pub performance: Performance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overall: f64,
    pub grade: Grade,
    pub rows: Vec<BreakdownRow>,
    pub missing_categories: Vec<String>,
}

/// Weighted sum in rubric order; missing categories count as 0.
pub fn overall_score(scores: &RubricScores, rubric: &Rubric) -> f64 {
    rubric
        .categories
        .iter()
        .map(|def| scores.get(&def.key).copied().unwrap_or(0.0) * def.weight)
        .sum()
}

pub fn run_stage5(scores: &RubricScores, rubric: &Rubric) -> ScoreBreakdown {
    let mut rows = Vec::with_capacity(rubric.categories.len());
    let mut missing_categories = Vec::new();

    for def in &rubric.categories {
        let raw = scores.get(&def.key).copied();
        if raw.is_none_or(|v| v == 0.0) {
            missing_categories.push(def.key.clone());
        }
        let raw_score = raw.unwrap_or(0.0);
        rows.push(BreakdownRow {
            key: def.key.clone(),
            label: def.label.clone(),
            raw_score,
            weight: def.weight,
            weighted_score: raw_score * def.weight,
            performance: performance_for(raw_score, &rubric.performance_bands),
        });
    }

    let overall = overall_score(scores, rubric);
    ScoreBreakdown {
        overall,
        grade: grade_for(overall, &rubric.grade_bands),
        rows,
        missing_categories,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_overall.rs"]
mod tests;
