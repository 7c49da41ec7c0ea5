//! Request body classification

use serde_json::Value;

/// A request payload, either structured JSON or the raw text as given
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A JSON object or array
    Structured(Value),
    /// Anything that is not a JSON object or array
    Raw(String),
}

impl Body {
    /// Classify a raw payload. Never fails: unparsable text is [`Body::Raw`].
    pub fn classify(raw: &str) -> Self {
        match parse_structured(raw) {
            Ok(value) => Body::Structured(value),
            Err(_) => Body::Raw(raw.to_string()),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Body::Structured(_))
    }
}

/// Why a payload was not treated as structured data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotStructured {
    Invalid,
    Scalar,
}

fn parse_structured(raw: &str) -> Result<Value, NotStructured> {
    let value: Value = serde_json::from_str(raw).map_err(|_| NotStructured::Invalid)?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(NotStructured::Scalar),
    }
}
