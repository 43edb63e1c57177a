//! Request payload parsing.

use serde_json::{Map, Number, Value};

use crate::error::OperationError;

/// A parsed gift card request body.
///
/// Fields are kept as raw JSON so each validation rule can decide for itself
/// what counts as missing or malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Parses a request body. Anything but a JSON object is an invalid request.
    pub fn parse(body: &[u8]) -> Result<Self, OperationError> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => Ok(Self { fields }),
            Ok(_) => Err(OperationError::InvalidRequest),
            Err(e) => {
                tracing::debug!(error = %e, "rejecting unparseable request body");
                Err(OperationError::InvalidRequest)
            }
        }
    }

    /// The `number` field rendered as a card token.
    ///
    /// Strings are taken as-is. JSON numbers with no fractional part use
    /// their integer text, so `1`, `1.0`, `1e0` and `"1"` all name the same
    /// card. Any other type counts as absent.
    pub fn number(&self) -> Option<String> {
        match self.fields.get("number") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(number_token(n)),
            _ => None,
        }
    }

    /// The raw `amount` field, if present.
    pub fn amount(&self) -> Option<&Value> {
        self.fields.get("amount")
    }
}

/// Largest magnitude at which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn number_token(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let payload = Payload::parse(br#"{"number":"GC001","amount":5}"#).unwrap();
        assert_eq!(payload.number().as_deref(), Some("GC001"));
        assert_eq!(payload.amount(), Some(&json!(5)));
    }

    #[test]
    fn test_numeric_number_uses_literal_text() {
        let payload = Payload::parse(br#"{"number":1}"#).unwrap();
        assert_eq!(payload.number().as_deref(), Some("1"));
    }

    #[test]
    fn test_integral_float_number_uses_integer_text() {
        let bodies: [&[u8]; 4] = [
            br#"{"number":1.0}"#,
            br#"{"number":1e0}"#,
            br#"{"number":1}"#,
            br#"{"number":"1"}"#,
        ];
        for body in bodies {
            let payload = Payload::parse(body).unwrap();
            assert_eq!(payload.number().as_deref(), Some("1"));
        }
        let payload = Payload::parse(br#"{"number":-0.0}"#).unwrap();
        assert_eq!(payload.number().as_deref(), Some("0"));
    }

    #[test]
    fn test_fractional_number_keeps_its_text() {
        let payload = Payload::parse(br#"{"number":1.5}"#).unwrap();
        assert_eq!(payload.number().as_deref(), Some("1.5"));
    }

    #[test]
    fn test_unsupported_number_type_is_absent() {
        let payload = Payload::parse(br#"{"number":{"id":1}}"#).unwrap();
        assert_eq!(payload.number(), None);
        let payload = Payload::parse(br#"{"number":null}"#).unwrap();
        assert_eq!(payload.number(), None);
    }

    #[test]
    fn test_malformed_json_is_invalid_request() {
        assert_eq!(
            Payload::parse(b"{number: 1"),
            Err(OperationError::InvalidRequest)
        );
        assert_eq!(Payload::parse(b""), Err(OperationError::InvalidRequest));
    }

    #[test]
    fn test_non_object_is_invalid_request() {
        assert_eq!(Payload::parse(b"[1,2]"), Err(OperationError::InvalidRequest));
        assert_eq!(Payload::parse(b"\"1\""), Err(OperationError::InvalidRequest));
    }
}
