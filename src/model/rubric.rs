use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CallRubricError, Result};
use crate::model::category::{ScoreCategory, category_order};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub key: String,
    pub label: String,
    pub weight: f64,
    /// Regex fragment matching the category label inside narrative text.
    pub label_pattern: String,
    /// Header spellings resolved to `key`; compared after header normalization.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeBands {
    pub excellent_min: f64,
    pub good_min: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBands {
    pub good_min: f64,
    pub average_min: f64,
}

/// Everything that fixes scoring semantics. Changing any field changes results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub name: String,
    pub categories: Vec<CategoryDef>,
    pub fragment_anchor: String,
    pub terminators: Vec<String>,
    pub grade_bands: GradeBands,
    pub performance_bands: PerformanceBands,
}

impl Rubric {
    pub fn call_training_v1() -> Self {
        let categories = category_order()
            .iter()
            .map(|&category| builtin_category(category))
            .collect();
        Self {
            name: "call_training_v1".to_string(),
            categories,
            fragment_anchor: ScoreCategory::ProductKnowledge.key().to_string(),
            terminators: vec![
                "**Critical Misses:**".to_string(),
                "**Conversion Potential:**".to_string(),
                "**Weighted Overall Score:**".to_string(),
            ],
            grade_bands: GradeBands {
                excellent_min: 8.0,
                good_min: 6.0,
            },
            performance_bands: PerformanceBands {
                good_min: 7.0,
                average_min: 5.0,
            },
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CallRubricError::io(path, e))?;
        let rubric: Rubric = serde_json::from_str(&raw)?;
        rubric.validate()?;
        tracing::debug!(
            rubric = %rubric.name,
            categories = rubric.categories.len(),
            "loaded rubric from {}",
            path.display()
        );
        Ok(rubric)
    }

    /// Structural checks. Label patterns are checked when an `Evaluator` compiles them.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(CallRubricError::InvalidRubric(
                "rubric defines no categories".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for def in &self.categories {
            if def.key.trim().is_empty() {
                return Err(CallRubricError::InvalidRubric(
                    "category key must not be empty".to_string(),
                ));
            }
            if !seen.insert(def.key.as_str()) {
                return Err(CallRubricError::InvalidRubric(format!(
                    "duplicate category key: {}",
                    def.key
                )));
            }
            if !def.weight.is_finite() || def.weight < 0.0 {
                return Err(CallRubricError::InvalidRubric(format!(
                    "weight for {} must be a finite non-negative number",
                    def.key
                )));
            }
            if def.label_pattern.trim().is_empty() {
                return Err(CallRubricError::InvalidRubric(format!(
                    "label pattern for {} must not be empty",
                    def.key
                )));
            }
        }
        let sum = self.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CallRubricError::InvalidRubric(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        if self.fragment_anchor.trim().is_empty() {
            return Err(CallRubricError::InvalidRubric(
                "fragment anchor must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn weight_sum(&self) -> f64 {
        self.categories.iter().map(|c| c.weight).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    pub fn category(&self, key: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.key == key)
    }
}

impl Default for Rubric {
    fn default() -> Self {
        Self::call_training_v1()
    }
}

fn builtin_category(category: ScoreCategory) -> CategoryDef {
    let (weight, label_pattern, synonyms): (f64, &str, &[&str]) = match category {
        ScoreCategory::ProductKnowledge => (0.30, r"Product\s*Knowledge", &["product knowledge"]),
        ScoreCategory::CostsBooking => (
            0.25,
            r"Costs?\s*(?:&|and)?\s*Booking",
            &[
                "costs & booking",
                "costs and booking",
                "costs booking",
                "cost and booking",
                "cost booking",
            ],
        ),
        ScoreCategory::ToneVoice => (
            0.20,
            r"Tone\s*(?:of)?\s*Voice",
            &["tone of voice", "tone voice"],
        ),
        ScoreCategory::ObjectionHandling => {
            (0.15, r"Objection\s*Handling", &["objection handling"])
        }
        ScoreCategory::CallControl => (
            0.10,
            r"Call\s*Control[/\s]*Flow",
            &["call control/flow", "call control flow"],
        ),
    };
    CategoryDef {
        key: category.key().to_string(),
        label: category.label().to_string(),
        weight,
        label_pattern: label_pattern.to_string(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/rubric.rs"]
mod tests;
