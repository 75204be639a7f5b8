use serde_json::{Map, Value};

/// Raw evaluator output. No schema is assumed.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationPayload {
    Text(String),
    Structured(Map<String, Value>),
    /// Anything else; only its textual form is scanned.
    Opaque(Value),
}

impl EvaluationPayload {
    pub fn to_text(&self) -> String {
        match self {
            EvaluationPayload::Text(text) => text.clone(),
            EvaluationPayload::Structured(map) => Value::Object(map.clone()).to_string(),
            EvaluationPayload::Opaque(value) => value.to_string(),
        }
    }
}

impl From<Value> for EvaluationPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => EvaluationPayload::Text(text),
            Value::Object(map) => EvaluationPayload::Structured(map),
            other => EvaluationPayload::Opaque(other),
        }
    }
}

impl From<String> for EvaluationPayload {
    fn from(text: String) -> Self {
        EvaluationPayload::Text(text)
    }
}

impl From<&str> for EvaluationPayload {
    fn from(text: &str) -> Self {
        EvaluationPayload::Text(text.to_string())
    }
}

impl From<Map<String, Value>> for EvaluationPayload {
    fn from(map: Map<String, Value>) -> Self {
        EvaluationPayload::Structured(map)
    }
}
