//! Validation rules for gift card requests.
//!
//! Each rule is a pure predicate over raw request fields (and the store,
//! where it needs one). Rules return the value they validated so callers can
//! chain them with `?`; the first failure wins and nothing is aggregated.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::Value;

use crate::store::BalanceStore;
use crate::types::is_representable;

/// The rule that rejected a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    ExistingGiftCardNumber,
    AvailableBalanceSufficient,
    Required,
    TypeMismatch,
    MaxLength,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ExistingGiftCardNumber => "ExistingGiftCardNumber",
            FailureKind::AvailableBalanceSufficient => "AvailableBalanceSufficient",
            FailureKind::Required => "Required",
            FailureKind::TypeMismatch => "TypeMismatch",
            FailureKind::MaxLength => "MaxLength",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub kind: FailureKind,
    /// Names of the request parameters at fault.
    pub params: Vec<String>,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(kind: FailureKind, param: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            params: vec![param.into()],
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.params.join(", "), self.message)
    }
}

/// Passes only when `number` names a card already in the store.
pub fn existing_gift_card_number<'a>(
    store: &BalanceStore,
    number: Option<&'a str>,
) -> Result<&'a str, ValidationFailure> {
    match number {
        Some(number) if store.contains(number) => Ok(number),
        _ => Err(ValidationFailure::new(
            FailureKind::ExistingGiftCardNumber,
            "number",
            "must be an existing gift card number",
        )),
    }
}

/// Passes when `number` is present and non-empty.
pub fn number_required(number: Option<&str>) -> Result<&str, ValidationFailure> {
    match number {
        Some(number) if !number.is_empty() => Ok(number),
        _ => Err(ValidationFailure::new(
            FailureKind::Required,
            "number",
            "number is required",
        )),
    }
}

fn amount_type_mismatch() -> ValidationFailure {
    ValidationFailure::new(
        FailureKind::TypeMismatch,
        "amount",
        "amount must be a number",
    )
}

/// Parses `amount` as a decimal.
///
/// Accepts JSON numbers and numeric strings (surrounding whitespace is
/// ignored). Missing values, null, booleans and non-numeric text all fail,
/// as do values outside a finite double or with an exponent beyond
/// [`MAX_SCALE`](crate::types::MAX_SCALE).
pub fn amount_is_numeric(raw: Option<&Value>) -> Result<BigDecimal, ValidationFailure> {
    let parsed = match raw {
        Some(Value::Number(n)) => BigDecimal::from_str(&n.to_string()).ok(),
        Some(Value::String(s)) => BigDecimal::from_str(s.trim()).ok(),
        _ => None,
    };

    parsed
        .filter(is_representable)
        .ok_or_else(amount_type_mismatch)
}

/// Passes when applying `delta` to `number` leaves a balance that can still
/// be stored and reported. Unknown cards count as zero.
pub fn resulting_balance_representable(
    store: &BalanceStore,
    number: &str,
    delta: &BigDecimal,
) -> Result<(), ValidationFailure> {
    let zero = BigDecimal::from(0);
    let balance = store.get(number).unwrap_or(&zero);
    if !is_representable(&(balance + delta)) {
        return Err(amount_type_mismatch());
    }
    Ok(())
}

/// Passes when `amount` does not exceed the current balance of `number`.
///
/// An unknown card has nothing available, so any positive amount fails.
pub fn available_balance_sufficient(
    store: &BalanceStore,
    number: &str,
    amount: &BigDecimal,
) -> Result<(), ValidationFailure> {
    let zero = BigDecimal::from(0);
    let balance = store.get(number).unwrap_or(&zero);
    if amount > balance {
        return Err(ValidationFailure::new(
            FailureKind::AvailableBalanceSufficient,
            "amount",
            "must be less than or equal to the current balance",
        ));
    }
    Ok(())
}

/// Passes when `value` is at most `max` characters long.
pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), ValidationFailure> {
    if value.chars().count() > max {
        return Err(ValidationFailure::new(
            FailureKind::MaxLength,
            field,
            format!("{} must be at most {} characters long", field, max),
        ));
    }
    Ok(())
}
