use serde_json::{Map, Value};

use crate::model::scores::RubricScores;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;
pub const PERCENT_SCALE_MAX: f64 = 100.0;

/// Drops non-numeric values and maps every number into `[0, 10]`.
/// Keys are kept as given; filtering to rubric categories happens downstream.
pub fn normalize(raw: &Map<String, Value>) -> RubricScores {
    let mut out = RubricScores::new();
    for (key, value) in raw {
        // Booleans are not numbers here, unlike in some JSON producers.
        let Some(number) = value.as_f64() else {
            tracing::debug!(key = %key, "dropping non-numeric score value");
            continue;
        };
        if let Some(score) = normalize_value(number) {
            out.insert(key.clone(), score);
        }
    }
    out
}

/// `None` only for NaN.
pub fn normalize_value(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    let rescaled = if value > SCORE_MAX {
        if value <= PERCENT_SCALE_MAX {
            value / 10.0
        } else {
            SCORE_MAX
        }
    } else {
        value
    };
    Some(rescaled.clamp(SCORE_MIN, SCORE_MAX))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_normalize.rs"]
mod tests;
