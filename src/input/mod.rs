use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{CallRubricError, Result};
use crate::model::payload::EvaluationPayload;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

pub fn load_payload(path: &Path) -> Result<EvaluationPayload> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CallRubricError::io("<stdin>", e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| CallRubricError::io(path, e))?
    };
    Ok(payload_from_raw(raw))
}

/// JSON documents become typed payloads; anything else is evaluator text.
pub fn payload_from_raw(raw: String) -> EvaluationPayload {
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => {
            tracing::debug!("input decoded as JSON");
            EvaluationPayload::from(value)
        }
        Err(_) => EvaluationPayload::Text(raw),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
