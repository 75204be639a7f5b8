use serde_json::{Map, Value};

use crate::model::payload::EvaluationPayload;

pub const NARRATIVE_FIELDS: [&str; 3] = ["detailed_feedback", "Evaluation Score", "evaluation"];

/// Where `scan_text` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSource {
    NarrativeField,
    RawText,
    /// Re-serialized mapping or scalar; its braces are not evaluator-authored.
    Serialized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPayload {
    pub structured: Option<Map<String, Value>>,
    pub scan_text: String,
    pub scan_source: ScanSource,
}

impl DecodedPayload {
    /// Whether `scan_text` may hold an evaluator-written JSON fragment.
    pub fn scan_is_authored(&self) -> bool {
        self.scan_source != ScanSource::Serialized
    }
}

pub fn run_stage1(payload: &EvaluationPayload) -> DecodedPayload {
    let structured = match payload {
        EvaluationPayload::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = %err, "payload text is not JSON; scanning as plain text");
                None
            }
        },
        EvaluationPayload::Structured(map) => Some(map.clone()),
        EvaluationPayload::Opaque(_) => None,
    };

    let narrative = structured
        .as_ref()
        .and_then(narrative_field)
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    let (scan_text, scan_source) = match (narrative, payload) {
        (Some(text), _) => (text, ScanSource::NarrativeField),
        (None, EvaluationPayload::Text(text)) => (text.clone(), ScanSource::RawText),
        (None, other) => (other.to_text(), ScanSource::Serialized),
    };

    DecodedPayload {
        structured,
        scan_text,
        scan_source,
    }
}

/// First narrative field holding a string. A later field is not consulted when
/// an earlier one is a string, even an empty one.
fn narrative_field(map: &Map<String, Value>) -> Option<&str> {
    NARRATIVE_FIELDS
        .iter()
        .find_map(|field| map.get(*field).and_then(Value::as_str))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_payload.rs"]
mod tests;
