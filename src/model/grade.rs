use serde::{Deserialize, Serialize};

use crate::model::rubric::{GradeBands, PerformanceBands};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    NeedsWork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Performance {
    Good,
    Average,
    NeedsWork,
}

pub fn grade_for(overall: f64, bands: &GradeBands) -> Grade {
    if overall >= bands.excellent_min {
        Grade::Excellent
    } else if overall >= bands.good_min {
        Grade::Good
    } else {
        Grade::NeedsWork
    }
}

pub fn performance_for(score: f64, bands: &PerformanceBands) -> Performance {
    if score >= bands.good_min {
        Performance::Good
    } else if score >= bands.average_min {
        Performance::Average
    } else {
        Performance::NeedsWork
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/grade.rs"]
mod tests;
