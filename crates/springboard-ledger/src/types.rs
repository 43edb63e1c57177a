//! Response types shared by every balance operation.

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Serialize, Serializer};

/// Successful operation body: `{"balance": <number>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceResponse {
    /// Balance after the operation, written as a JSON number.
    #[serde(serialize_with = "serialize_balance")]
    pub balance: BigDecimal,
}

impl BalanceResponse {
    pub fn new(balance: BigDecimal) -> Self {
        Self { balance }
    }
}

/// Most decimal places (or trailing-zero exponent) a balance may carry.
pub const MAX_SCALE: i64 = 20;

/// Whether `value` can be stored as a balance and written back out as a
/// finite JSON number.
pub fn is_representable(value: &BigDecimal) -> bool {
    let (_, scale) = value.as_bigint_and_exponent();
    scale.abs() <= MAX_SCALE && value.to_f64().is_some_and(f64::is_finite)
}

/// Writes a balance as a plain JSON number.
///
/// Integral balances become JSON integers (`9950`, not `9950.0`); anything
/// else goes out as a double, which is what API clients parse balances into.
pub fn serialize_balance<S>(balance: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if balance.is_integer() {
        if let Some(whole) = balance.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }

    match balance.to_f64() {
        Some(value) if value.is_finite() => serializer.serialize_f64(value),
        _ => Err(serde::ser::Error::custom(format!(
            "balance {} is not representable as a JSON number",
            balance
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn to_json(balance: &str) -> serde_json::Value {
        let response = BalanceResponse::new(BigDecimal::from_str(balance).unwrap());
        serde_json::to_value(&response).unwrap()
    }

    #[test]
    fn test_integral_balance_is_integer() {
        assert_eq!(to_json("9950"), json!({ "balance": 9950 }));
        assert_eq!(to_json("0"), json!({ "balance": 0 }));
    }

    #[test]
    fn test_trailing_zero_scale_is_integer() {
        let json = serde_json::to_string(&BalanceResponse::new(
            BigDecimal::from_str("25.00").unwrap(),
        ))
        .unwrap();
        assert_eq!(json, r#"{"balance":25}"#);
    }

    #[test]
    fn test_is_representable() {
        assert!(is_representable(&BigDecimal::from_str("9950").unwrap()));
        assert!(is_representable(&BigDecimal::from_str("0.01").unwrap()));
        assert!(!is_representable(&BigDecimal::from_str("1e400").unwrap()));
        assert!(!is_representable(&BigDecimal::from_str("1e-2000000000").unwrap()));
        assert!(!is_representable(&BigDecimal::from_str(&"9".repeat(400)).unwrap()));
    }

    #[test]
    fn test_fractional_balance_is_float() {
        assert_eq!(to_json("12.5"), json!({ "balance": 12.5 }));
        assert_eq!(to_json("-3.25"), json!({ "balance": -3.25 }));
    }
}
